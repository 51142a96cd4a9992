use thiserror::Error;

/// The result of attempting to perform an invalid operation on a [Game](crate::game::Game).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The acting player cannot afford the action.
    #[error("not enough coins for this action")]
    InsufficientFunds,
    /// The arrested player holds fewer coins than the arrest takes from them.
    #[error("the target cannot pay what the arrest takes")]
    TargetCannotPay,
    #[error("a sanctioned player cannot gather or tax")]
    Sanctioned,
    #[error("the target is already sanctioned")]
    AlreadySanctioned,
    #[error("the target has been eliminated")]
    TargetNotAlive,
    #[error("the target was arrested too recently")]
    TargetRecentlyArrested,
    #[error("this player is prevented from arresting")]
    Prevented,
    #[error("the target is already prevented from arresting")]
    AlreadyPrevented,
    #[error("a game needs between 2 and 6 players")]
    InvalidPlayerCount,
    #[error("the game has already ended")]
    GameAlreadyEnded,
    #[error("no players have joined the game")]
    NoPlayers,
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("no player exists with the given name")]
    PlayerNotFound,
    #[error("invalid player index")]
    InvalidPlayerIndex,
    #[error("this player cannot be chosen for this action")]
    InvalidPlayerChoice,
    #[error("a player with this name has already joined")]
    DuplicatePlayerName,
    #[error("cannot join a game in progress")]
    CannotJoinStartedGame,
    #[error("it is not this player's turn")]
    NotYourTurn,
    #[error("an action has already been taken this turn")]
    ActionAlreadyTaken,
    #[error("this player has been eliminated")]
    PlayerEliminated,
    #[error("there is no action waiting to be blocked")]
    NoPendingAction,
    #[error("this player cannot block the pending action")]
    CannotBlock,
    #[error("this player's role does not have that ability")]
    WrongRole,
    #[error("this ability has already been used this turn")]
    AbilityAlreadyUsed,
    #[error("the game is still in progress")]
    GameInProgress,
    #[error("the game ended without a winner")]
    NoWinner,
}

impl GameError {
    /// Returns `true` for the rejections a player can run into during normal play,
    /// as opposed to the caller driving the engine incorrectly.
    pub fn is_rule_violation(&self) -> bool {
        use GameError::*;
        matches!(
            self,
            InsufficientFunds
                | TargetCannotPay
                | Sanctioned
                | AlreadySanctioned
                | TargetNotAlive
                | TargetRecentlyArrested
                | Prevented
                | AlreadyPrevented
                | InvalidPlayerChoice
                | CannotBlock
                | WrongRole
                | AbilityAlreadyUsed
        )
    }
}
