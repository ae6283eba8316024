mod discounted_price;

pub use discounted_price::DiscountedPrice;
