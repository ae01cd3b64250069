//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Hands are empty and the next deal can start.
    WaitingForDeal,
    /// Non-dealer players are taking their turns.
    PlayerTurn,
    /// The dealer plays out their hand.
    DealerTurn,
    /// Round has ended and results can be settled.
    RoundOver,
}

/// A seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Seat {
    /// Index into the non-dealer players.
    Player(usize),
    /// The dealer.
    Dealer,
}
