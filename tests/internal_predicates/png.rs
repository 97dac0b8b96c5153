use predicates::prelude::*;
use predicates::reflection::{Case, PredicateReflection, Product};
use std::fmt;

/// Checks that some bytes can be parsed as a PNG file, optionally of a given size.
#[derive(Debug)]
pub struct PngPredicate {
    size: Option<(u32, u32)>,
}

impl PngPredicate {
    pub fn new() -> Self {
        PngPredicate { size: None }
    }

    pub fn with_size(self, w: u32, h: u32) -> Self {
        PngPredicate {
            size: Some((w, h)),
        }
    }

    fn read_size(data: &[u8]) -> Result<(u32, u32), png::DecodingError> {
        let reader = png::Decoder::new(data).read_info()?;
        let info = reader.info();
        Ok((info.width, info.height))
    }
}

impl Predicate<[u8]> for PngPredicate {
    fn eval(&self, data: &[u8]) -> bool {
        match (Self::read_size(data), self.size) {
            (Ok(actual), Some(expected)) => actual == expected,
            (Ok(_), None) => true,
            (Err(_), _) => false,
        }
    }

    fn find_case<'a>(&'a self, expected: bool, data: &[u8]) -> Option<Case<'a>> {
        match Self::read_size(data) {
            Err(e) => {
                if !expected {
                    Some(Case::new(Some(self), false).add_product(Product::new("error", e)))
                } else {
                    None
                }
            }

            Ok((w, h)) => {
                let result = self.eval(data);
                if result == expected {
                    Some(
                        Case::new(Some(self), result)
                            .add_product(Product::new("actual size", format!("{} x {}", w, h))),
                    )
                } else {
                    None
                }
            }
        }
    }
}

impl PredicateReflection for PngPredicate {}

impl fmt::Display for PngPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.size {
            Some((w, h)) => write!(f, "is a PNG with size {} x {}", w, h),
            None => write!(f, "is a PNG"),
        }
    }
}
