//! Bridge component between the Leptos UI and the imperative `canvas::Engine`.
//!
//! The canvas crate owns hit-testing, snapping, and drawing; this host wires
//! DOM events into engine handlers and executes the host-side commands the
//! engine signals back (fullscreen requests, redraws). Pointer-move,
//! pointer-up and keydown are window-level listeners so gestures survive
//! leaving the canvas; they are attached on mount and removed on cleanup.

use std::cell::RefCell;
use std::rc::Rc;

use canvas::engine::{Action, Engine};
use canvas::palette::ROD_SPECS;
use leptos::html;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

type SharedEngine = Rc<RefCell<Option<Engine>>>;

/// Keeps the `ResizeObserver` and its callback alive until cleanup.
type ObserverSlot = Rc<RefCell<Option<(web_sys::ResizeObserver, Closure<dyn FnMut()>)>>>;

/// `on_cleanup` for browser handles. Cleanup runs on the thread that
/// registered it, so the wrapper is never crossed.
fn on_cleanup_local(f: impl FnOnce() + 'static) {
    let f = SendWrapper::new(f);
    on_cleanup(move || f.take()());
}

fn render_now(engine: &SharedEngine) {
    if let Some(engine) = engine.borrow_mut().as_mut() {
        if let Err(err) = engine.render() {
            log::warn!("canvas render failed: {err:?}");
        }
    }
}

/// Schedule one redraw on the next animation frame. Events arriving before
/// the frame fires coalesce into that single redraw.
fn request_render(engine: &SharedEngine, raf_pending: RwSignal<bool>) {
    if raf_pending.get_untracked() {
        return;
    }
    raf_pending.set(true);

    let Some(window) = web_sys::window() else {
        raf_pending.set(false);
        render_now(engine);
        return;
    };

    let engine_for_cb = Rc::clone(engine);
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        raf_pending.set(false);
        render_now(&engine_for_cb);
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_ok()
    {
        *holder.borrow_mut() = Some(cb);
    } else {
        raf_pending.set(false);
        render_now(engine);
    }
}

/// Whether the board stage itself is the element currently in fullscreen.
/// Another element's fullscreen session does not count.
fn stage_is_fullscreen(document: &web_sys::Document, container_ref: NodeRef<html::Div>) -> bool {
    match (document.fullscreen_element(), container_ref.get_untracked()) {
        (Some(active), Some(stage)) => active == web_sys::Element::from(stage),
        _ => false,
    }
}

/// Ask the browser to enter or leave fullscreen on the board stage. Engine
/// state follows the `fullscreenchange` notification, not this call.
fn toggle_fullscreen(container_ref: NodeRef<html::Div>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if stage_is_fullscreen(&document, container_ref) {
        document.exit_fullscreen();
    } else if let Some(stage) = container_ref.get_untracked() {
        if let Err(err) = stage.request_fullscreen() {
            log::warn!("fullscreen request rejected: {err:?}");
        }
    }
}

/// Execute whatever the engine asked for after handling an event.
fn apply_action(
    action: Action,
    engine: &SharedEngine,
    total: RwSignal<u32>,
    raf_pending: RwSignal<bool>,
    container_ref: NodeRef<html::Div>,
) {
    match action {
        Action::None => {}
        Action::RenderNeeded => {
            if let Some(engine) = engine.borrow().as_ref() {
                total.set(engine.total());
            }
            request_render(engine, raf_pending);
        }
        Action::FullscreenToggleRequested => toggle_fullscreen(container_ref),
    }
}

/// One palette swatch button per catalog entry, scaled down from rod size.
fn palette_row(
    engine: &SharedEngine,
    total: RwSignal<u32>,
    raf_pending: RwSignal<bool>,
    container_ref: NodeRef<html::Div>,
    scale: f64,
) -> impl IntoView + use<> {
    ROD_SPECS
        .iter()
        .map(|spec| {
            let engine = Rc::clone(engine);
            let value = spec.value;
            let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                let action = {
                    let mut guard = engine.borrow_mut();
                    let Some(eng) = guard.as_mut() else {
                        return;
                    };
                    let point = eng.to_surface(f64::from(ev.client_x()), f64::from(ev.client_y()));
                    eng.on_palette_pointer_down(value, point)
                };
                apply_action(action, &engine, total, raf_pending, container_ref);
            };
            view! {
                <button
                    type="button"
                    class="palette__swatch"
                    title=format!("{} ({})", spec.name, spec.value)
                    style:width=format!("{}px", spec.width() * scale)
                    style:height=format!("{}px", spec.height() * scale)
                    style:background=spec.color
                    style:color=spec.text_color
                    on:pointerdown=on_pointer_down
                >
                    {value}
                </button>
            }
        })
        .collect_view()
}

/// Interactive Cuisenaire rod board.
///
/// Mounts `canvas::engine::Engine` on the canvas element, forwards pointer
/// and keyboard events, and mirrors the running total and display toggles
/// into signals for the surrounding HUD.
#[component]
pub fn RodBoard() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let container_ref = NodeRef::<html::Div>::new();
    let total = RwSignal::new(0_u32);
    let show_values = RwSignal::new(true);
    let show_grid = RwSignal::new(true);
    let is_fullscreen = RwSignal::new(false);
    let raf_pending = RwSignal::new(false);
    let engine: SharedEngine = Rc::new(RefCell::new(None));
    let resize_observer: ObserverSlot = Rc::new(RefCell::new(None));

    // Mount the engine once the canvas element exists, then keep the backing
    // buffer in sync with the stage layout.
    {
        let engine = Rc::clone(&engine);
        let resize_observer = Rc::clone(&resize_observer);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }

            let mut instance = Engine::new(canvas);
            instance.sync_viewport();
            if let Err(err) = instance.render() {
                log::warn!("initial canvas render failed: {err:?}");
            }
            *engine.borrow_mut() = Some(instance);

            if resize_observer.borrow().is_none() {
                if let Some(stage) = container_ref.get_untracked() {
                    let engine_for_resize = Rc::clone(&engine);
                    let cb = Closure::<dyn FnMut()>::new(move || {
                        if let Some(engine) = engine_for_resize.borrow_mut().as_mut() {
                            engine.sync_viewport();
                            if let Err(err) = engine.render() {
                                log::warn!("canvas render failed: {err:?}");
                            }
                        }
                    });
                    match web_sys::ResizeObserver::new(cb.as_ref().unchecked_ref()) {
                        Ok(observer) => {
                            observer.observe(&stage);
                            *resize_observer.borrow_mut() = Some((observer, cb));
                        }
                        Err(err) => log::warn!("resize observer unavailable: {err:?}"),
                    }
                }
            }
        });
    }

    {
        let resize_observer = Rc::clone(&resize_observer);
        on_cleanup_local(move || {
            if let Some((observer, _cb)) = resize_observer.borrow_mut().take() {
                observer.disconnect();
            }
        });
    }

    // Window-level listeners: moves and releases during a gesture, and the
    // global keyboard shortcuts.
    if let Some(window) = web_sys::window() {
        let engine_for_move = Rc::clone(&engine);
        let move_cb = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(
            move |ev: web_sys::PointerEvent| {
                let action = {
                    let mut guard = engine_for_move.borrow_mut();
                    let Some(eng) = guard.as_mut() else {
                        return;
                    };
                    let point = eng.to_surface(f64::from(ev.client_x()), f64::from(ev.client_y()));
                    eng.on_pointer_move(point)
                };
                apply_action(action, &engine_for_move, total, raf_pending, container_ref);
            },
        );

        let engine_for_up = Rc::clone(&engine);
        let up_cb = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(
            move |_ev: web_sys::PointerEvent| {
                let action = {
                    let mut guard = engine_for_up.borrow_mut();
                    let Some(eng) = guard.as_mut() else {
                        return;
                    };
                    eng.on_pointer_up()
                };
                apply_action(action, &engine_for_up, total, raf_pending, container_ref);
            },
        );

        let engine_for_key = Rc::clone(&engine);
        let key_cb = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |ev: web_sys::KeyboardEvent| {
                let action = {
                    let mut guard = engine_for_key.borrow_mut();
                    let Some(eng) = guard.as_mut() else {
                        return;
                    };
                    eng.on_key_down(&ev.key())
                };
                apply_action(action, &engine_for_key, total, raf_pending, container_ref);
            },
        );

        for (event, cb) in [
            ("pointermove", move_cb.as_ref()),
            ("pointerup", up_cb.as_ref()),
            ("keydown", key_cb.as_ref()),
        ] {
            if window
                .add_event_listener_with_callback(event, cb.unchecked_ref())
                .is_err()
            {
                log::warn!("failed to attach {event} listener");
            }
        }

        let window_for_cleanup = window.clone();
        on_cleanup_local(move || {
            for (event, cb) in [
                ("pointermove", move_cb.as_ref()),
                ("pointerup", up_cb.as_ref()),
                ("keydown", key_cb.as_ref()),
            ] {
                if window_for_cleanup
                    .remove_event_listener_with_callback(event, cb.unchecked_ref())
                    .is_err()
                {
                    log::warn!("failed to detach {event} listener");
                }
            }
        });
    }

    // Fullscreen status tracking: the engine only learns about fullscreen
    // from the browser's notification, never from the request itself.
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        let engine_for_fs = Rc::clone(&engine);
        let fs_cb = Closure::<dyn FnMut()>::new(move || {
            let entered = web_sys::window()
                .and_then(|w| w.document())
                .is_some_and(|d| stage_is_fullscreen(&d, container_ref));
            is_fullscreen.set(entered);
            let action = {
                let mut guard = engine_for_fs.borrow_mut();
                let Some(eng) = guard.as_mut() else {
                    return;
                };
                eng.sync_viewport();
                eng.set_fullscreen(entered)
            };
            apply_action(action, &engine_for_fs, total, raf_pending, container_ref);
        });
        if document
            .add_event_listener_with_callback("fullscreenchange", fs_cb.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to attach fullscreenchange listener");
        }
        on_cleanup_local(move || {
            if document
                .remove_event_listener_with_callback(
                    "fullscreenchange",
                    fs_cb.as_ref().unchecked_ref(),
                )
                .is_err()
            {
                log::warn!("failed to detach fullscreenchange listener");
            }
        });
    }

    let on_canvas_pointer_down = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            ev.prevent_default();
            let action = {
                let mut guard = engine.borrow_mut();
                let Some(eng) = guard.as_mut() else {
                    return;
                };
                let point = eng.to_surface(f64::from(ev.client_x()), f64::from(ev.client_y()));
                eng.on_pointer_down(point)
            };
            apply_action(action, &engine, total, raf_pending, container_ref);
        }
    };

    let on_canvas_double_click = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::MouseEvent| {
            let action = {
                let mut guard = engine.borrow_mut();
                let Some(eng) = guard.as_mut() else {
                    return;
                };
                let point = eng.to_surface(f64::from(ev.client_x()), f64::from(ev.client_y()));
                eng.on_double_click(point)
            };
            apply_action(action, &engine, total, raf_pending, container_ref);
        }
    };

    let on_toggle_values = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::Event| {
            let checked = event_target_checked(&ev);
            show_values.set(checked);
            let action = {
                let mut guard = engine.borrow_mut();
                let Some(eng) = guard.as_mut() else {
                    return;
                };
                eng.set_show_values(checked)
            };
            apply_action(action, &engine, total, raf_pending, container_ref);
        }
    };

    let on_toggle_grid = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::Event| {
            let checked = event_target_checked(&ev);
            show_grid.set(checked);
            let action = {
                let mut guard = engine.borrow_mut();
                let Some(eng) = guard.as_mut() else {
                    return;
                };
                eng.set_show_grid(checked)
            };
            apply_action(action, &engine, total, raf_pending, container_ref);
        }
    };

    let on_clear = {
        let engine = Rc::clone(&engine);
        move |_ev: leptos::ev::MouseEvent| {
            let action = {
                let mut guard = engine.borrow_mut();
                let Some(eng) = guard.as_mut() else {
                    return;
                };
                eng.clear_all()
            };
            apply_action(action, &engine, total, raf_pending, container_ref);
        }
    };
    let on_clear_overlay = on_clear.clone();

    let on_fullscreen_button =
        move |_ev: leptos::ev::MouseEvent| toggle_fullscreen(container_ref);

    let top_palette = palette_row(&engine, total, raf_pending, container_ref, 0.75);
    let overlay_palette = palette_row(&engine, total, raf_pending, container_ref, 0.9);

    view! {
        <div class="rod-board">
            <div class="palette" class=("is-hidden", move || is_fullscreen.get())>
                {top_palette}
            </div>
            <div
                node_ref=container_ref
                class="rod-board__stage"
                class=("rod-board__stage--fullscreen", move || is_fullscreen.get())
            >
                <div
                    class="palette palette--overlay"
                    class=("is-hidden", move || !is_fullscreen.get())
                >
                    {overlay_palette}
                </div>
                <canvas
                    node_ref=canvas_ref
                    class="rod-board__canvas"
                    on:pointerdown=on_canvas_pointer_down
                    on:dblclick=on_canvas_double_click
                >
                    "Tu navegador no soporta canvas."
                </canvas>
                <div class="rod-board__hud">
                    <div class="rod-board__total">
                        <span>"Total:"</span>
                        <span class="rod-board__total-value">{total}</span>
                    </div>
                    <div class="rod-board__toggles">
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=show_values
                                on:change=on_toggle_values
                            />
                            "Valores"
                        </label>
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=show_grid
                                on:change=on_toggle_grid
                            />
                            "Cuadrícula"
                        </label>
                    </div>
                    <button
                        type="button"
                        class="btn btn--danger"
                        class=("is-hidden", move || !is_fullscreen.get())
                        on:click=on_clear_overlay
                    >
                        "Limpiar"
                    </button>
                </div>
                <button
                    type="button"
                    class="rod-board__fullscreen-toggle"
                    on:click=on_fullscreen_button
                >
                    {move || {
                        if is_fullscreen.get() { "Salir Pantalla Completa" } else { "Pantalla Completa" }
                    }}
                </button>
            </div>
            <div class="rod-board__footer" class=("is-hidden", move || is_fullscreen.get())>
                <div class="rod-board__shortcuts">
                    <h3>"Atajos de Teclado"</h3>
                    <ul>
                        <li><kbd>"R"</kbd>" Rotar"</li>
                        <li><kbd>"Delete"</kbd><kbd>"Backspace"</kbd>" Borrar"</li>
                        <li><kbd>"F"</kbd>" Pantalla completa"</li>
                    </ul>
                </div>
                <div class="rod-board__actions">
                    <button type="button" class="btn btn--danger" on:click=on_clear>
                        "Limpiar Lienzo"
                    </button>
                </div>
            </div>
        </div>
    }
}
