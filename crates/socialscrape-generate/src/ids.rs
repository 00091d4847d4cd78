use std::collections::HashSet;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Kind of generated identifier; selects the id prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdKind {
    User,
    Post,
    Comment,
    Commenter,
}

impl IdKind {
    pub fn prefix(self) -> &'static str {
        match self {
            IdKind::User => "u",
            IdKind::Post => "p",
            IdKind::Comment => "c",
            IdKind::Commenter => "cu",
        }
    }
}

#[derive(Debug)]
enum IdSource {
    Random,
    Seeded(Box<ChaCha8Rng>),
}

/// Issues `<prefix>_<8 hex>` ids, unique for the lifetime of the generator.
#[derive(Debug)]
pub struct IdGenerator {
    source: IdSource,
    issued: HashSet<String>,
}

impl IdGenerator {
    /// Ids drawn from UUID v4 randomness.
    pub fn random() -> Self {
        Self {
            source: IdSource::Random,
            issued: HashSet::new(),
        }
    }

    /// Ids drawn from a seeded ChaCha stream; the same seed yields the same ids.
    pub fn seeded(seed: u64) -> Self {
        Self {
            source: IdSource::Seeded(Box::new(ChaCha8Rng::seed_from_u64(seed))),
            issued: HashSet::new(),
        }
    }

    pub fn next_id(&mut self, kind: IdKind) -> String {
        // Suffixes carry only 32 bits; redraw on collision.
        loop {
            let id = format!("{}_{}", kind.prefix(), self.draw_hex());
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }

    pub fn issued(&self) -> usize {
        self.issued.len()
    }

    fn draw_hex(&mut self) -> String {
        match &mut self.source {
            IdSource::Random => {
                let uuid = uuid::Uuid::new_v4();
                hex::encode(&uuid.as_bytes()[..4])
            }
            IdSource::Seeded(rng) => {
                let mut bytes = [0_u8; 4];
                rng.fill_bytes(&mut bytes);
                hex::encode(bytes)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_carry_prefix_and_hex_suffix() {
        let mut ids = IdGenerator::random();
        let id = ids.next_id(IdKind::Commenter);
        let suffix = id.strip_prefix("cu_").expect("commenter prefix");
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|ch| ch.is_ascii_hexdigit() && !ch.is_ascii_uppercase()));
    }

    #[test]
    fn seeded_ids_repeat_for_same_seed() {
        let mut a = IdGenerator::seeded(7);
        let mut b = IdGenerator::seeded(7);
        for _ in 0..16 {
            assert_eq!(a.next_id(IdKind::Post), b.next_id(IdKind::Post));
        }
    }

    #[test]
    fn ids_never_repeat() {
        let mut ids = IdGenerator::seeded(42);
        let mut seen = HashSet::new();
        for _ in 0..5_000 {
            assert!(seen.insert(ids.next_id(IdKind::Comment)));
        }
        assert_eq!(ids.issued(), 5_000);
    }
}
