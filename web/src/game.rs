use crate::settings::{GridSizeField, Settings};
use crate::utils::*;
use gloo::timers::callback::Timeout;
use memorito_core as game;
use game::DeckGenerator;
use yew::prelude::*;

/// How long a mismatched pair stays on display before it is concealed.
pub(crate) const MISMATCH_CONCEAL_MS: u32 = 1_000;

/// One dealt game. The generation tags the deal so that a conceal timer fired
/// for an older game can never touch a newer one.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GameSession {
    pub engine: game::PlayEngine,
    pub generation: u32,
}

impl GameSession {
    pub(crate) fn deal(grid_size: game::GridSize, seed: u64, generation: u32) -> Self {
        let config = game::GameConfig::new(grid_size);
        let deck = game::ShuffledDeckGenerator::new(seed).generate(config);
        Self {
            engine: game::PlayEngine::new(deck),
            generation,
        }
    }

    /// Conceals the mismatched pair only when the timer that fired belongs to
    /// this deal.
    pub(crate) fn conceal_if_current(&mut self, generation: u32) -> bool {
        if generation != self.generation {
            log::debug!("conceal timer for stale generation {} ignored", generation);
            return false;
        }
        self.engine.conceal_mismatch().has_update()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CardClicked(game::CardId),
    GridSizeInput(String),
    NewGame,
    ConcealElapsed(u32),
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    id: game::CardId,
    card_state: game::CardState,
    #[prop_or_default]
    value: Option<game::CardValue>,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::CardId>,
}

#[function_component(CardView)]
fn card_component(props: &CardProps) -> Html {
    use game::CardState::*;

    let CardProps {
        id,
        card_state,
        value,
        locked,
        callback,
    } = props.clone();

    let mut class = classes!(
        "card",
        match card_state {
            Down => classes!(),
            Up => classes!("open"),
            Solved => classes!("open", "solved"),
        }
    );
    if locked {
        class.push("locked");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("card {} clicked", id);
        callback.emit(id);
    });

    let label = value
        .map(|value| value.to_string())
        .unwrap_or_else(|| "?".to_string());

    html! {
        <td {class} {onclick}>{label}</td>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    grid_field: GridSizeField,
    session: GameSession,
    seed: u64,
    pending_conceal: Option<Timeout>,
}

impl GameView {
    fn new_session(&mut self) {
        let generation = self.session.generation.wrapping_add(1);
        // dropping the handle cancels the browser timer
        self.pending_conceal = None;
        self.session = GameSession::deal(self.grid_field.size(), self.seed, generation);
        log::debug!(
            "dealt generation {} at size {}",
            generation,
            self.grid_field.size()
        );
    }

    fn handle_card_click(&mut self, ctx: &Context<Self>, id: game::CardId) -> bool {
        let outcome = match self.session.engine.select(id) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("card {} rejected: {}", id, err);
                return false;
            }
        };
        log::debug!("card {}: {:?}", id, outcome);

        if outcome == game::SelectOutcome::Mismatched {
            let generation = self.session.generation;
            let link = ctx.link().clone();
            self.pending_conceal = Some(Timeout::new(MISMATCH_CONCEAL_MS, move || {
                link.send_message(Msg::ConcealElapsed(generation))
            }));
        }

        outcome.has_update()
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let settings: Settings = LocalOrDefault::local_or_default();
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        Self {
            grid_field: GridSizeField::new(settings.grid_size),
            session: GameSession::deal(settings.grid_size, seed, 0),
            seed,
            pending_conceal: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            CardClicked(id) => self.handle_card_click(ctx, id),
            GridSizeInput(value) => {
                let prev_text = self.grid_field.text().to_string();
                match self.grid_field.set_input(&value) {
                    Some(size) => {
                        Settings { grid_size: size }.local_save();
                        self.seed = js_random_seed();
                        self.new_session();
                        true
                    }
                    None => prev_text != self.grid_field.text(),
                }
            }
            NewGame => {
                self.seed = js_random_seed();
                self.new_session();
                true
            }
            ConcealElapsed(generation) => {
                self.pending_conceal = None;
                self.session.conceal_if_current(generation)
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let engine = &self.session.engine;
        let side = game::CardCount::from(self.grid_field.size().get());
        let total = engine.total_cards();
        let won = engine.is_won();
        let moves = engine.move_count();

        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            GridSizeInput(input.value())
        });
        let cb_new_game = ctx.link().callback(|_: MouseEvent| NewGame);
        let cb_card = ctx.link().callback(CardClicked);

        html! {
            <div class="memorito">
                <h1>{"Memory Game"}</h1>
                <nav>
                    <label for="grid-size">{"Grid Size: (2-10)"}</label>
                    <input
                        id="grid-size"
                        type="text"
                        value={self.grid_field.text().to_string()}
                        {oninput}
                    />
                    <aside>{format!("Moves: {}", moves)}</aside>
                </nav>
                <table>
                    {
                        for (0..side).map(|row| html! {
                            <tr>
                                {
                                    for (0..side).map(|col| {
                                        let id = row * side + col;
                                        if id < total {
                                            let id = id as game::CardId;
                                            html! {
                                                <CardView
                                                    {id}
                                                    card_state={engine.card_at(id)}
                                                    value={engine.revealed_value(id)}
                                                    locked={!engine.can_select(id)}
                                                    callback={cb_card.clone()}
                                                />
                                            }
                                        } else {
                                            // odd grids deal one card short of the square
                                            html! { <td class="void"/> }
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                if won {
                    <div class="won">{format!("You Won in {} moves!", moves)}</div>
                }
                <button onclick={cb_new_game}>
                    { if won { "Play Again" } else { "Reset" } }
                </button>
            </div>
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn settings_roundtrip_through_local_storage() {
        let settings = Settings {
            grid_size: game::GridSize::new(6).unwrap(),
        };
        settings.local_save();
        assert_eq!(Settings::local_or_default(), settings);
    }
}
