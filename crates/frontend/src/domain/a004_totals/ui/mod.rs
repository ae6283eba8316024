mod grand_total;

pub use grand_total::GrandTotal;
