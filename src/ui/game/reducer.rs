use crate::ui::game::intent::GameIntent;
use crate::ui::game::state::GameState;
use crate::ui::mvi::Reducer;

pub struct GameReducer;

impl Reducer for GameReducer {
    type State = GameState;
    type Intent = GameIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GameIntent::Move { index } => {
                if state.is_decided() || !state.current().is_open(index) {
                    return state;
                }
                let next = state.current().with_mark(index, state.mover());
                let GameState { mut history, step } = state;
                // Playing from a rewound position drops the old future.
                history.truncate(step + 1);
                history.push(next);
                GameState {
                    step: history.len() - 1,
                    history,
                }
            }
            GameIntent::JumpTo { step } => {
                if step >= state.history.len() {
                    return state;
                }
                GameState { step, ..state }
            }
        }
    }
}
