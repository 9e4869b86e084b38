use std::fmt::Write as _;

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seed for deterministic world generation.
///
/// This is a 128-bit (16-byte) seed used to initialize the random number
/// generator that decides obstacle kinds and spawn intervals. Two sessions
/// built from the same seed and driven with the same frame deltas and jump
/// decisions play out identically, which makes trials reproducible.
///
/// Serialized as a 32-character lowercase hex string.
///
/// # Example
///
/// ```
/// use dinorun_engine::{GameSession, WorldSeed};
/// use rand::Rng as _;
///
/// let seed: WorldSeed = rand::rng().random();
///
/// let session1 = GameSession::with_seed(seed);
/// let session2 = GameSession::with_seed(seed);
/// assert_eq!(session1.seed(), session2.seed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorldSeed([u8; 16]);

impl WorldSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Derives a seed from a 64-bit value, for command-line use.
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        Pcg32::seed_from_u64(value).random()
    }

    pub(crate) fn rng(self) -> Pcg32 {
        Pcg32::from_seed(self.0)
    }
}

impl Serialize for WorldSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let num = u128::from_be_bytes(self.0);
        let mut hex_str = String::with_capacity(2 * self.0.len());
        write!(&mut hex_str, "{num:032x}").unwrap();
        serializer.serialize_str(&hex_str)
    }
}

impl<'de> Deserialize<'de> for WorldSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        if hex_str.len() != 32 {
            return Err(serde::de::Error::custom(format!(
                "invalid world seed: expected 32 hex characters, got {}",
                hex_str.len()
            )));
        }
        let num = u128::from_str_radix(&hex_str, 16).map_err(|e| {
            serde::de::Error::custom(format!("invalid world seed: {hex_str} ({e})"))
        })?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Distribution<WorldSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> WorldSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        WorldSeed(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_as_hex() {
        let mut bytes = [0; 16];
        bytes[15] = 0xab;
        let json = serde_json::to_string(&WorldSeed::from_bytes(bytes)).unwrap();
        assert_eq!(json, "\"000000000000000000000000000000ab\"");
        let back: WorldSeed = serde_json::from_str(&json).unwrap();
        assert_eq!(back, WorldSeed::from_bytes(bytes));
    }

    #[test]
    fn test_rejects_malformed_hex() {
        assert!(serde_json::from_str::<WorldSeed>("\"abc\"").is_err());
        let not_hex = format!("\"{}\"", "zz".repeat(16));
        assert!(serde_json::from_str::<WorldSeed>(&not_hex).is_err());
    }

    #[test]
    fn test_from_u64_is_stable() {
        assert_eq!(WorldSeed::from_u64(7), WorldSeed::from_u64(7));
        assert_ne!(WorldSeed::from_u64(7), WorldSeed::from_u64(8));
    }
}
