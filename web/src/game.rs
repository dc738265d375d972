use trivia_core as trivia;
use trivia::{
    CategoryProvider, CellPos, Clue, Disclosure, GameConfig, GameError, GameSession, RoundTicket,
};
use yew::prelude::*;

/// Seed for a round, drawn from JavaScript's Math.random.
fn fresh_seed() -> u64 {
    use js_sys::Math::random;
    const WORD: f64 = 4_294_967_296.0;
    let high = (random() * WORD) as u64;
    let low = (random() * WORD) as u64;
    (high << 32) | low
}

pub(crate) enum Msg {
    NewRound,
    RoundDealt(RoundTicket, trivia::Result<trivia::Board>),
    CellClicked(CellPos),
}

const fn disclosure_class(disclosure: Disclosure) -> &'static str {
    match disclosure {
        Disclosure::Hidden => "hidden",
        Disclosure::Question => "question",
        Disclosure::Answer => "answer",
    }
}

#[derive(Properties, Clone, Debug, PartialEq)]
struct CellProps {
    pos: CellPos,
    text: AttrValue,
    disclosure: Disclosure,
    callback: Callback<CellPos>,
}

impl CellProps {
    fn new(pos: CellPos, clue: &Clue, callback: &Callback<CellPos>) -> Self {
        Self {
            pos,
            text: AttrValue::from(clue.face().to_string()),
            disclosure: clue.disclosure(),
            callback: callback.clone(),
        }
    }
}

/// A single clue cell. Its props only change when its own clue does, so a click re-renders just
/// the clicked cell.
#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        pos,
        text,
        disclosure,
        callback,
    } = props.clone();

    let class = classes!("clue", disclosure_class(disclosure));
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("{:?} clicked", pos);
        callback.emit(pos);
    });

    html! {
        <td {class} {onclick}>{text}</td>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct GameProps<P: PartialEq> {
    pub config: GameConfig,
    /// Force a seed for the first round instead of random
    #[prop_or_default]
    pub seed: Option<u64>,
    pub provider: P,
}

pub(crate) struct GameView<P> {
    session: GameSession,
    provider: P,
    seed: u64,
    on_cell: Callback<CellPos>,
}

impl<P> GameView<P>
where
    P: CategoryProvider + Clone + PartialEq + 'static,
{
    fn start_round(&mut self, ctx: &Context<Self>) {
        let (ticket, guard) = self.session.begin_round();
        let provider = self.provider.clone();
        let config = *self.session.config();
        let sampler = trivia::ShuffleSampler::new(self.seed);
        log::debug!("dealing round {} with seed {}", ticket.generation(), self.seed);

        ctx.link().send_future(async move {
            let result = trivia::deal_board(&provider, &config, sampler).await;
            drop(guard);
            Msg::RoundDealt(ticket, result)
        });
    }

    fn view_board(&self) -> Html {
        let Some(board) = self.session.board() else {
            return html! {};
        };
        let (rows, _) = board.size();

        html! {
            <table id="jeopardy">
                <thead>
                    <tr>
                        { for board.titles().map(|title| html! { <th>{title.to_string()}</th> }) }
                    </tr>
                </thead>
                <tbody>
                    {
                        for (0..rows).map(|row| html! {
                            <tr>
                                {
                                    for board.row(row).enumerate().map(|(column, clue)| {
                                        let props = CellProps::new((row, column), clue, &self.on_cell);
                                        html! { <CellView ..props/> }
                                    })
                                }
                            </tr>
                        })
                    }
                </tbody>
            </table>
        }
    }
}

impl<P> Component for GameView<P>
where
    P: CategoryProvider + Clone + PartialEq + 'static,
{
    type Message = Msg;
    type Properties = GameProps<P>;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        ctx.link().send_message(Msg::NewRound);

        Self {
            session: GameSession::new(props.config),
            provider: props.provider.clone(),
            seed: props.seed.unwrap_or_else(fresh_seed),
            on_cell: ctx.link().callback(Msg::CellClicked),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            NewRound => {
                if self.session.is_loading() {
                    log::debug!("round {} still loading", self.session.generation());
                    return false;
                }
                if self.session.generation() > 0 {
                    self.seed = fresh_seed();
                }
                self.start_round(ctx);
                true
            }
            RoundDealt(ticket, result) => match self.session.finish_round(ticket, result) {
                Ok(()) => true,
                Err(GameError::StaleRound) => false,
                Err(_) => true,
            },
            CellClicked(pos) => match self.session.reveal_at(pos) {
                Ok(outcome) => outcome.has_update(),
                Err(err) => {
                    log::error!("click at {:?} ignored: {}", pos, err);
                    false
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let loading = self.session.is_loading();
        let start_label = if self.session.board().is_some() {
            "Restart"
        } else {
            "Start!"
        };
        let cb_new_round = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewRound
        });

        html! {
            <div class="trivia">
                <nav>
                    <button id="start-button" onclick={cb_new_round} disabled={loading}>
                        {start_label}
                    </button>
                    if loading {
                        <span id="spinner" aria-busy="true"/>
                    }
                </nav>
                if let Some(err) = self.session.last_error() {
                    <p class="error">{err.to_string()}</p>
                }
                { self.view_board() }
                if self.session.is_round_over() {
                    <p class="status">{"Every clue is answered. Restart for a new board!"}</p>
                }
            </div>
        }
    }
}
