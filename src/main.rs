//! Number wheel page.
//! Owns the engine, drives it from a fixed-interval timer, and paints it.

use gloo_timers::callback::Interval;
use log::{debug, info, warn};
use number_wheel::config::{CANVAS_HEIGHT, CANVAS_WIDTH, TICK_MS, WHEEL_CENTER_Y};
use number_wheel::renderer::{CanvasRenderer, WheelRenderer};
use number_wheel::store::{load_or_default, save_settings, LocalStorageStore};
use number_wheel::{
    angle_delta, pointer_angle, SpinEngine, SpinEvent, SpinStatus, TableSnapshot, WheelSettings,
    WheelSnapshot,
};
use rand::rngs::ThreadRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

mod components;
mod hooks;
mod utils;

use components::{ControlBar, SettingsPanel, WinnerTable};

type Engine = SpinEngine<ThreadRng>;

/// The part of engine state the DOM shows. Re-rendered only when it changes.
#[derive(Clone, PartialEq)]
struct PageState {
    table: TableSnapshot,
    idle: bool,
    remaining: usize,
    auto_spins_left: Option<u32>,
    settings: WheelSettings,
}

impl PageState {
    fn of(engine: &Engine) -> Self {
        Self {
            table: engine.table_snapshot(),
            idle: engine.status() == SpinStatus::Idle,
            remaining: engine.pool().len(),
            auto_spins_left: engine.auto_spins_remaining(),
            settings: engine.settings().clone(),
        }
    }
}

/// A wheel being turned by hand.
struct Drag {
    last_angle: f64,
    last_ms: f64,
    /// Degrees per second over the latest pointer move.
    velocity: f64,
}

fn canvas_point(e: &PointerEvent) -> (f64, f64) {
    (e.offset_x() as f64, e.offset_y() as f64)
}

fn wheel_center() -> (f64, f64) {
    (CANVAS_WIDTH as f64 / 2.0, WHEEL_CENTER_Y)
}

fn canvas_renderer(canvas_ref: &NodeRef) -> Option<CanvasRenderer> {
    let canvas = canvas_ref.cast::<HtmlCanvasElement>()?;
    let ctx = canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;
    Some(CanvasRenderer::new(
        ctx,
        canvas.width() as f64,
        canvas.height() as f64,
    ))
}

fn log_events(events: &[SpinEvent]) {
    for event in events {
        match event {
            SpinEvent::WinnerRecorded { label } => info!("Winner: {}", label),
            SpinEvent::PoolExhausted => info!("All numbers drawn"),
            other => debug!("{:?}", other),
        }
    }
}

#[function_component(Main)]
fn main_component() -> Html {
    let engine: Rc<RefCell<Engine>> =
        use_mut_ref(|| SpinEngine::new(load_or_default(&LocalStorageStore), rand::rng()));
    let page = {
        let engine = engine.clone();
        use_state(move || PageState::of(&engine.borrow()))
    };
    let show_settings = use_state(|| false);
    let settings_error = use_state(|| None::<AttrValue>);
    let canvas_ref = use_node_ref();

    // Frame loop. Handles captured here outlive renders, so compare against
    // the last published state rather than reading `page`.
    {
        let engine = engine.clone();
        let page = page.clone();
        let canvas_ref = canvas_ref.clone();
        use_effect_with((), move |_| {
            let renderer = canvas_renderer(&canvas_ref);
            if renderer.is_none() {
                warn!("Canvas 2d context unavailable; wheel will not be drawn");
            }
            let mut last_page: Option<PageState> = None;
            let mut last_frame: Option<(WheelSnapshot, WheelSettings)> = None;

            let interval = Interval::new(TICK_MS, move || {
                let mut engine = engine.borrow_mut();
                let events = engine.tick(js_sys::Date::now());
                log_events(&events);

                if let Some(renderer) = &renderer {
                    let frame = (engine.wheel_snapshot(), engine.settings().clone());
                    if last_frame.as_ref() != Some(&frame) {
                        renderer.draw_wheel(&frame.0, &frame.1);
                        last_frame = Some(frame);
                    }
                }

                let next = PageState::of(&engine);
                if last_page.as_ref() != Some(&next) {
                    last_page = Some(next.clone());
                    page.set(next);
                }
            });
            move || drop(interval)
        });
    }

    let drag = use_mut_ref(|| None::<Drag>);
    let on_pointer_down = {
        let engine = engine.clone();
        let drag = drag.clone();
        Callback::from(move |e: PointerEvent| {
            let engine = engine.borrow();
            let (x, y) = canvas_point(&e);
            let (cx, cy) = wheel_center();
            let on_wheel = (x - cx).hypot(y - cy) <= engine.settings().wheel_size;
            if !engine.accepts_manual_spin() || !on_wheel {
                return;
            }
            *drag.borrow_mut() = Some(Drag {
                last_angle: pointer_angle(x, y, cx, cy),
                last_ms: js_sys::Date::now(),
                velocity: 0.0,
            });
        })
    };
    let on_pointer_move = {
        let engine = engine.clone();
        let drag = drag.clone();
        Callback::from(move |e: PointerEvent| {
            let mut drag = drag.borrow_mut();
            let Some(state) = drag.as_mut() else {
                return;
            };
            let (x, y) = canvas_point(&e);
            let (cx, cy) = wheel_center();
            let angle = pointer_angle(x, y, cx, cy);
            let now = js_sys::Date::now();
            let delta = angle_delta(state.last_angle, angle);
            let elapsed_s = (now - state.last_ms) / 1000.0;
            if elapsed_s > 0.0 {
                state.velocity = delta.to_degrees() / elapsed_s;
            }
            engine.borrow_mut().drag(delta);
            state.last_angle = angle;
            state.last_ms = now;
        })
    };
    let on_pointer_up = {
        let engine = engine.clone();
        let drag = drag.clone();
        Callback::from(move |_: PointerEvent| {
            let released = drag.borrow_mut().take();
            if let Some(state) = released {
                engine.borrow_mut().fling(state.velocity);
            }
        })
    };
    let on_pointer_leave = {
        let drag = drag.clone();
        Callback::from(move |_: PointerEvent| {
            drag.borrow_mut().take();
        })
    };

    let on_spin = {
        let engine = engine.clone();
        Callback::from(move |_: MouseEvent| {
            engine.borrow_mut().request_spin();
        })
    };
    let on_auto_spin = {
        let engine = engine.clone();
        Callback::from(move |_: MouseEvent| {
            engine.borrow_mut().start_auto_spin();
        })
    };
    let on_reset = {
        let engine = engine.clone();
        Callback::from(move |_: MouseEvent| engine.borrow_mut().reset())
    };
    let on_open_settings = {
        let show_settings = show_settings.clone();
        let settings_error = settings_error.clone();
        Callback::from(move |_: MouseEvent| {
            settings_error.set(None);
            show_settings.set(true);
        })
    };
    let on_close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_: ()| show_settings.set(false))
    };
    let on_save_settings = {
        let engine = engine.clone();
        let show_settings = show_settings.clone();
        let settings_error = settings_error.clone();
        Callback::from(move |draft: WheelSettings| {
            match save_settings(&LocalStorageStore, &draft) {
                Ok(settings) => {
                    engine.borrow_mut().apply_settings(settings);
                    settings_error.set(None);
                    show_settings.set(false);
                }
                Err(e) => settings_error.set(Some(e.to_string().into())),
            }
        })
    };

    let state = &*page;
    let can_spin = state.idle && state.remaining > 0 && state.auto_spins_left.is_none();

    html! {
        <div class="container">
            <h1>{ "Number Wheel" }</h1>
            <canvas
                id="wheelCanvas"
                ref={canvas_ref}
                width={CANVAS_WIDTH.to_string()}
                height={CANVAS_HEIGHT.to_string()}
                onpointerdown={on_pointer_down}
                onpointermove={on_pointer_move}
                onpointerup={on_pointer_up}
                onpointerleave={on_pointer_leave}
            />
            <ControlBar
                can_spin={can_spin}
                can_auto_spin={can_spin && state.settings.auto_spin > 0}
                remaining={state.remaining}
                auto_spins_left={state.auto_spins_left}
                on_spin={on_spin}
                on_auto_spin={on_auto_spin}
                on_reset={on_reset}
                on_settings={on_open_settings}
            />
            <WinnerTable
                table={state.table.clone()}
                sections={state.settings.sections}
                darkness={state.settings.darkness}
                font_size={state.settings.table_font_size}
                flash_color={AttrValue::from(state.settings.flash_color.clone())}
                bg_color={AttrValue::from(state.settings.bg_color.clone())}
            />
            if *show_settings {
                <SettingsPanel
                    current={state.settings.clone()}
                    error={(*settings_error).clone()}
                    on_save={on_save_settings}
                    on_close={on_close_settings}
                />
            }
        </div>
    }
}

#[function_component]
pub fn App() -> Html {
    html! { <Main /> }
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
