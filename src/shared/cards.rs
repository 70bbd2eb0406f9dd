/// Status-derived display class assigned to a card at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardClass {
    Active,
    Complete,
}

/// Active/complete visibility toggle over the rendered card list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    Active,
    Complete,
}

impl Filter {
    pub fn matches(self, class: CardClass) -> bool {
        matches!(
            (self, class),
            (Filter::Active, CardClass::Active) | (Filter::Complete, CardClass::Complete)
        )
    }
}

/// One rendered detail card.
#[derive(Debug, Clone)]
pub struct Card {
    pub id: i64,
    pub class: CardClass,
    pub visible: bool,
    pub lines: Vec<String>,
}

impl Card {
    /// Complete cards start hidden; the default view is the Active filter.
    pub fn new(id: i64, class: CardClass, lines: Vec<String>) -> Self {
        Self {
            id,
            class,
            visible: class == CardClass::Active,
            lines,
        }
    }
}

/// Write-once-per-page-load card list; the only post-load mutation is
/// visibility toggling through the filter buttons.
#[derive(Debug, Default)]
pub struct CardList {
    cards: Vec<Card>,
}

impl CardList {
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn apply_filter(&mut self, filter: Filter) {
        for card in &mut self.cards {
            card.visible = filter.matches(card.class);
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.cards.iter().filter(|c| c.visible).count()
    }

    /// (active, complete) card counts, independent of visibility.
    pub fn counts(&self) -> (usize, usize) {
        let active = self
            .cards
            .iter()
            .filter(|c| c.class == CardClass::Active)
            .count();
        (active, self.cards.len() - active)
    }
}
