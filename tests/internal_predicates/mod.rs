//! Predicates to check that some output ([u8]) is of a certain file type.

mod png;

pub use self::png::PngPredicate;

pub fn is_png() -> PngPredicate {
    PngPredicate::new()
}
