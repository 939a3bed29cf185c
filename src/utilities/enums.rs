//! Closed enumerations shared across indicator families.

use crate::utilities::errors::TaError;

/// Moving-average variant used by composite indicators (BBANDS, STOCH,
/// APO/PPO, MACDEXT, ...). Tags follow the reference numbering so a
/// marshalling layer can pass the raw integer through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaType {
    #[default]
    Sma = 0,
    Ema = 1,
    Wma = 2,
    Dema = 3,
    Tema = 4,
    Trima = 5,
    Kama = 6,
    Mama = 7,
    T3 = 8,
}

impl MaType {
    /// Decode a raw tag, failing with the caller's indicator name so the
    /// error message points at the right call site.
    pub fn from_tag(name: &'static str, tag: i32) -> Result<Self, TaError> {
        match tag {
            0 => Ok(MaType::Sma),
            1 => Ok(MaType::Ema),
            2 => Ok(MaType::Wma),
            3 => Ok(MaType::Dema),
            4 => Ok(MaType::Tema),
            5 => Ok(MaType::Trima),
            6 => Ok(MaType::Kama),
            7 => Ok(MaType::Mama),
            8 => Ok(MaType::T3),
            _ => Err(TaError::InvalidMaType { name, tag }),
        }
    }
}

impl TryFrom<i32> for MaType {
    type Error = TaError;

    fn try_from(tag: i32) -> Result<Self, TaError> {
        MaType::from_tag("matype", tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matype_round_trip() {
        for tag in 0..=8 {
            let ty = MaType::try_from(tag).expect("valid tag");
            assert_eq!(ty as i32, tag);
        }
        assert!(MaType::try_from(9).is_err());
        assert!(MaType::try_from(-1).is_err());
    }
}
