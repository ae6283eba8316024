pub mod aggregate;

pub use aggregate::{
    Accessory, AccessoryDraft, AccessoryError, AccessoryId, AccessoryList, HiddenDataError,
    LoadOutcome, SubmitCheck,
};
