//! Pool of goal tokens that have not been drawn in the current game.

use ricochet_core::TargetToken;

/// Undrawn goal tokens, kept in token order so draws stay reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bag {
    tokens: Vec<TargetToken>,
}

impl Bag {
    /// Creates an empty bag.
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Replaces the contents of the bag with the provided tokens.
    pub fn refill<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = TargetToken>,
    {
        self.tokens = tokens.into_iter().collect();
        self.tokens.sort_unstable();
        self.tokens.dedup();
    }

    /// Removes the token from the bag, reporting whether it was present.
    pub fn take(&mut self, token: TargetToken) -> bool {
        match self.tokens.binary_search(&token) {
            Ok(index) => {
                let _ = self.tokens.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    /// Reports whether the token is still undrawn.
    #[must_use]
    pub fn contains(&self, token: TargetToken) -> bool {
        self.tokens.binary_search(&token).is_ok()
    }

    /// Undrawn tokens in token order.
    #[must_use]
    pub fn tokens(&self) -> &[TargetToken] {
        &self.tokens
    }

    /// Number of undrawn tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Reports whether every token has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use ricochet_core::TargetToken;

    use super::Bag;

    #[test]
    fn take_removes_each_token_once() {
        let mut bag = Bag::new();
        bag.refill(TargetToken::all());
        assert_eq!(bag.len(), 17);

        assert!(bag.take(TargetToken::Wild));
        assert!(!bag.take(TargetToken::Wild));
        assert!(!bag.contains(TargetToken::Wild));
        assert_eq!(bag.len(), 16);
    }

    #[test]
    fn refill_discards_duplicates() {
        let mut bag = Bag::new();
        bag.refill([TargetToken::Wild, TargetToken::Wild]);
        assert_eq!(bag.tokens(), &[TargetToken::Wild]);
    }
}
