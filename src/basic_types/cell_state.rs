/// The classification of a single cell.
///
/// `Open` and `Blocked` are derived from the remaining solutions; `Queen` is a commitment, made
/// either by the user or forced because only one completion of the board remains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// No complete solution consistent with the committed queens places a queen here.
    Blocked,
    /// At least one complete solution consistent with the committed queens places a queen here.
    #[default]
    Open,
    Queen,
}

impl CellState {
    /// The integer encoding used by boards exchanged with older front-ends: `-1` for
    /// [`CellState::Blocked`], `0` for [`CellState::Open`] and `1` for [`CellState::Queen`].
    pub fn encoded(self) -> i8 {
        match self {
            CellState::Blocked => -1,
            CellState::Open => 0,
            CellState::Queen => 1,
        }
    }

    pub fn is_decided(self) -> bool {
        !matches!(self, CellState::Open)
    }
}
