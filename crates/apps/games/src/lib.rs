//! Game desktop apps: a pair-matching memory game and snake.

use leptos::ev::KeyboardEvent;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use platform_host::random_unit;
use system_ui::prelude::*;

pub mod memory;
pub mod snake;

use memory::{FlipOutcome, MemoryGame, FLIP_BACK_DELAY};
use snake::{Cell, Heading, SnakeGame, GRID_SIZE, TICK_INTERVAL};

#[component]
/// Memory game window contents.
pub fn MemoryGameApp() -> impl IntoView {
    let game = create_rw_signal(MemoryGame::shuffled(&mut random_unit));
    let flip_back_timer = store_value(None::<TimeoutHandle>);

    let clear_timer = move || {
        if let Some(handle) = flip_back_timer.get_value() {
            handle.clear();
        }
        flip_back_timer.set_value(None);
    };
    on_cleanup(clear_timer);

    let flip = move |index: usize| {
        let mut outcome = FlipOutcome::Ignored;
        game.update(|game| outcome = game.flip(index));
        if outcome != FlipOutcome::Mismatched {
            return;
        }
        if let Ok(handle) = set_timeout_with_handle(
            move || {
                let _ = game.try_update(MemoryGame::flip_back);
            },
            FLIP_BACK_DELAY,
        ) {
            flip_back_timer.set_value(Some(handle));
        }
    };

    let reset = Callback::new(move |_| {
        clear_timer();
        game.update(|game| game.reset(&mut random_unit));
    });

    view! {
        <div class="app-shell app-memory-shell">
            <Stack gap=LayoutGap::Md>
                <Cluster>
                    <Icon icon=IconName::Gamepad size=IconSize::Md />
                    <Heading>"Memory Game"</Heading>
                </Cluster>
                <Show
                    when=move || game.with(MemoryGame::is_won)
                    fallback=move || {
                        view! {
                            <Grid columns=4 gap=LayoutGap::Sm ui_slot="memory-board">
                                {(0..16)
                                    .map(|index| {
                                        let card = move || game.with(|game| game.cards().get(index).copied());
                                        view! {
                                            <Button
                                                layout_class="memory-card"
                                                size=ButtonSize::Lg
                                                selected=Signal::derive(move || card().is_some_and(|card| card.face_up()))
                                                on_click=Callback::new(move |_| flip(index))
                                            >
                                                {move || match card() {
                                                    Some(card) if card.face_up() => card.symbol,
                                                    _ => "?",
                                                }}
                                            </Button>
                                        }
                                    })
                                    .collect_view()}
                            </Grid>
                            <Cluster>
                                <Text tone=TextTone::Secondary>
                                    {move || format!("Moves: {}", game.with(MemoryGame::moves))}
                                </Text>
                                <Button variant=ButtonVariant::Quiet leading_icon=IconName::Refresh on_click=reset>
                                    "Reset"
                                </Button>
                            </Cluster>
                        }
                    }
                >
                    <Stack align=LayoutAlign::Center ui_slot="memory-won">
                        <Icon icon=IconName::Trophy size=IconSize::Lg />
                        <Text role=TextRole::Title>"You Won! \u{1F389}"</Text>
                        <Text tone=TextTone::Secondary>
                            {move || format!("Completed in {} moves", game.with(MemoryGame::moves))}
                        </Text>
                        <Button variant=ButtonVariant::Primary leading_icon=IconName::Refresh on_click=reset>
                            "Play Again"
                        </Button>
                    </Stack>
                </Show>
            </Stack>
        </div>
    }
}

fn snake_cell_kind(game: &SnakeGame, cell: Cell) -> &'static str {
    if game.head() == cell {
        "head"
    } else if game.body()[1..].contains(&cell) {
        "body"
    } else if game.food() == cell {
        "food"
    } else {
        "empty"
    }
}

#[component]
/// Snake window contents. Keys are read while the game surface has focus.
pub fn SnakeGameApp() -> impl IntoView {
    let game = create_rw_signal(SnakeGame::new(&mut random_unit));

    if let Ok(interval) = set_interval_with_handle(
        move || {
            let _ = game.try_update(|game| game.step(&mut random_unit));
        },
        TICK_INTERVAL,
    ) {
        on_cleanup(move || interval.clear());
    }

    let on_keydown = move |ev: KeyboardEvent| {
        if game.with_untracked(SnakeGame::is_game_over) {
            return;
        }
        let key = ev.key();
        if key == " " {
            ev.prevent_default();
            game.update(SnakeGame::toggle_pause);
        } else if let Some(heading) = Heading::from_key(&key) {
            ev.prevent_default();
            game.update(|game| {
                game.steer(heading);
            });
        }
    };

    let press = move |heading: Heading| {
        Callback::new(move |_| game.update(|game| game.press_direction(heading)))
    };
    let reset = Callback::new(move |_| game.update(|game| game.reset(&mut random_unit)));

    view! {
        <div class="app-shell app-snake-shell" tabindex="0" on:keydown=on_keydown>
            <Stack gap=LayoutGap::Sm>
                <Cluster>
                    <Icon icon=IconName::Snake size=IconSize::Md />
                    <Heading>"Snake Game"</Heading>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                        {move || format!("High: {}", game.with(SnakeGame::high_score))}
                    </Text>
                    <Text role=TextRole::Label tone=TextTone::Accent>
                        {move || format!("Score: {}", game.with(SnakeGame::score))}
                    </Text>
                </Cluster>
                <Show
                    when=move || game.with(SnakeGame::is_game_over)
                    fallback=move || {
                        view! {
                            <div class="snake-board" data-grid-size=GRID_SIZE>
                                {(0..GRID_SIZE * GRID_SIZE)
                                    .map(|i| {
                                        let cell = Cell::new(i % GRID_SIZE, i / GRID_SIZE);
                                        view! {
                                            <div
                                                class="snake-cell"
                                                data-cell=move || game.with(|game| snake_cell_kind(game, cell))
                                            ></div>
                                        }
                                    })
                                    .collect_view()}
                                <Show when=move || game.with(SnakeGame::is_paused)>
                                    <div class="snake-pause-overlay">
                                        <Button
                                            variant=ButtonVariant::Primary
                                            size=ButtonSize::Lg
                                            aria_label="Start"
                                            leading_icon=IconName::Play
                                            on_click=Callback::new(move |_| game.update(SnakeGame::resume))
                                        >
                                            ""
                                        </Button>
                                        <Text tone=TextTone::Secondary>"Tap to start"</Text>
                                    </div>
                                </Show>
                            </div>
                            <Grid columns=3 gap=LayoutGap::Sm ui_slot="snake-controls">
                                <span></span>
                                <Button aria_label="Up" leading_icon=IconName::ArrowUp on_click=press(Heading::Up)>""</Button>
                                <span></span>
                                <Button aria_label="Left" leading_icon=IconName::ArrowLeft on_click=press(Heading::Left)>""</Button>
                                <Button
                                    aria_label="Pause"
                                    on_click=Callback::new(move |_| game.update(SnakeGame::toggle_pause))
                                >
                                    {move || {
                                        let icon = if game.with(SnakeGame::is_paused) {
                                            IconName::Play
                                        } else {
                                            IconName::Pause
                                        };
                                        view! { <Icon icon=icon size=IconSize::Sm /> }
                                    }}
                                </Button>
                                <Button aria_label="Right" leading_icon=IconName::ArrowRight on_click=press(Heading::Right)>""</Button>
                                <span></span>
                                <Button aria_label="Down" leading_icon=IconName::ArrowDown on_click=press(Heading::Down)>""</Button>
                                <span></span>
                            </Grid>
                            <Text role=TextRole::Caption tone=TextTone::Secondary>
                                "Use arrow keys or WASD to move \u{2022} Space to pause"
                            </Text>
                            <Button variant=ButtonVariant::Quiet leading_icon=IconName::Refresh on_click=reset>
                                "Reset"
                            </Button>
                        }
                    }
                >
                    <Stack align=LayoutAlign::Center ui_slot="snake-game-over">
                        <Icon icon=IconName::Trophy size=IconSize::Lg />
                        <Text role=TextRole::Title>"Game Over!"</Text>
                        <Text tone=TextTone::Secondary>
                            {move || format!("Score: {}", game.with(SnakeGame::score))}
                        </Text>
                        <Button variant=ButtonVariant::Primary leading_icon=IconName::Refresh on_click=reset>
                            "Play Again"
                        </Button>
                    </Stack>
                </Show>
            </Stack>
        </div>
    }
}
