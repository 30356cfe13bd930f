mod heading;

pub use self::heading::heading;
