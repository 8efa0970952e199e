// Draft engine: snake pick order, rosters, the user's queue, and the state
// machine that ties them together.

pub mod pick;
pub mod player;
pub mod queue;
pub mod roster;
pub mod state;
