//! Stock Context - Value Objects

use crate::domain::DomainError;

/// 单次盘点数量，至少为 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountQuantity(i64);

impl CountQuantity {
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value < 1 {
            return Err(DomainError::invalid("qty", "must be greater than or equal to 1"));
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl Default for CountQuantity {
    fn default() -> Self {
        Self(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_must_be_positive() {
        assert_eq!(CountQuantity::new(3).unwrap().get(), 3);
        assert!(CountQuantity::new(0).is_err());
        assert!(CountQuantity::new(-1).is_err());
    }
}
