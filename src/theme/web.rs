//! Browser bindings: `localStorage`, the live document, and the event
//! listeners that drive the controller for the lifetime of the page.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ Document, Element, Storage, Window };
use crate::configs::ThemeConfig;
use crate::error::ThemeError;
use crate::theme::controller::ThemeController;
use crate::theme::store::ThemeStore;
use crate::theme::surface::ThemeSurface;
use crate::utils::icons::{ Icon, ICON_ATTR, STROKE_SELECTOR };
use crate::utils::{
    FrameStep,
    IconFrame,
    IconTransition,
    SettleAction,
    ThemeState,
    TransitionGuard,
    TransitionRun,
};

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
const META_SELECTOR: &str = "meta[name=\"theme-color\"]";

type FrameCallback = Closure<dyn FnMut(f64)>;

pub type WebThemeController = ThemeController<LocalStore, DomSurface>;

pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("localStorage unavailable, theme choice will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, ThemeError> {
        self.storage.as_ref().ok_or_else(|| ThemeError::Storage("localStorage unavailable".to_string()))
    }
}

impl ThemeStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(format!("{:?}", e)))
    }

    fn remove(&mut self, key: &str) -> Result<(), ThemeError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| ThemeError::Storage(format!("{:?}", e)))
    }
}

pub struct DomSurface {
    window: Window,
    document: Document,
    toggle_id: String,
    guard: Rc<RefCell<TransitionGuard>>,
}

impl DomSurface {
    pub fn new(window: Window, document: Document, config: &ThemeConfig) -> Self {
        Self {
            window,
            document,
            toggle_id: config.toggle_id.clone(),
            guard: Rc::new(RefCell::new(TransitionGuard::new())),
        }
    }

    fn matches(&self, query: &str) -> bool {
        self.window
            .match_media(query)
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
}

impl ThemeSurface for DomSurface {
    fn prefers_dark(&self) -> bool {
        self.matches(DARK_QUERY)
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.matches(REDUCED_MOTION_QUERY)
    }

    fn set_root_class(&mut self, class: &str, enabled: bool) -> Result<(), ThemeError> {
        let body = self.document.body().ok_or_else(|| ThemeError::Dom("document has no body".to_string()))?;
        body.class_list().toggle_with_force(class, enabled)?;
        Ok(())
    }

    fn set_tab_color(&mut self, color: &str) -> Result<(), ThemeError> {
        let meta = match self.document.query_selector(META_SELECTOR)? {
            Some(meta) => meta,
            None => create_theme_meta(&self.document)?,
        };
        meta.set_attribute("content", color)?;
        Ok(())
    }

    fn render_icon(&mut self, state: ThemeState) -> Result<(), ThemeError> {
        // A running transition picks the new target up at its swap or its end.
        let mut guard = self.guard.borrow_mut();
        if guard.is_running() {
            guard.begin(state);
            return Ok(());
        }
        drop(guard);
        paint_icon(&self.document, &self.toggle_id, state)
    }

    fn has_rendered_icon(&self) -> bool {
        self.guard.borrow().is_running() ||
            find_svg(&self.document, &self.toggle_id).is_some()
    }

    fn animate_icon(&mut self, transition: IconTransition) -> Result<(), ThemeError> {
        if !self.guard.borrow_mut().begin(transition.target()) {
            log::debug!("Transition in flight, retargeted to {}", transition.target());
            return Ok(());
        }
        let painter = FramePainter {
            document: self.document.clone(),
            toggle_id: self.toggle_id.clone(),
            guard: self.guard.clone(),
        };
        start_transition(&self.window, painter, transition);
        Ok(())
    }
}

fn create_theme_meta(document: &Document) -> Result<Element, ThemeError> {
    let head = document.head().ok_or_else(|| ThemeError::Dom("document has no head".to_string()))?;
    let meta = document.create_element("meta")?;
    meta.set_attribute("name", "theme-color")?;
    head.append_child(&meta)?;
    Ok(meta)
}

fn find_svg(document: &Document, toggle_id: &str) -> Option<Element> {
    document.get_element_by_id(toggle_id)?.query_selector("svg").ok().flatten()
}

/// Swaps the toggle's markup for the icon of `state` and renders it inline.
/// A page without the toggle is left alone.
fn paint_icon(document: &Document, toggle_id: &str, state: ThemeState) -> Result<(), ThemeError> {
    let Some(toggle) = document.get_element_by_id(toggle_id) else {
        return Ok(());
    };
    toggle.set_inner_html(&state.icon().placeholder());
    replace_icons(&toggle)
}

/// Renders every `data-feather` placeholder under `root` as inline SVG.
fn replace_icons(root: &Element) -> Result<(), ThemeError> {
    let nodes = root.query_selector_all(&format!("[{}]", ICON_ATTR))?;
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        match el.get_attribute(ICON_ATTR).as_deref().and_then(Icon::from_name) {
            Some(icon) => el.set_outer_html(&icon.svg()),
            None => log::debug!("Unknown icon {:?}", el.get_attribute(ICON_ATTR)),
        }
    }
    Ok(())
}

fn paint_frame(document: &Document, toggle_id: &str, frame: &IconFrame) -> Result<(), ThemeError> {
    let Some(svg) = find_svg(document, toggle_id) else {
        return Ok(());
    };
    svg.set_attribute(
        "style",
        &format!("transform: {}; transform-origin: 50% 50%; transform-box: fill-box", frame.transform())
    )?;

    let strokes = svg.query_selector_all(STROKE_SELECTOR)?;
    for i in 0..strokes.length() {
        let Some(el) = strokes.item(i).and_then(|n| n.dyn_into::<web_sys::SvgGeometryElement>().ok()) else {
            continue;
        };
        let length = f64::from(el.get_total_length());
        el.set_attribute("stroke-dasharray", &format!("{:.3}", length))?;
        el.set_attribute("stroke-dashoffset", &format!("{:.3}", length * frame.dash))?;
    }
    Ok(())
}

#[derive(Clone)]
struct FramePainter {
    document: Document,
    toggle_id: String,
    guard: Rc<RefCell<TransitionGuard>>,
}

impl FramePainter {
    /// Paints the frame for `timestamp`; `false` once the run has settled.
    fn advance(&self, run: &mut TransitionRun, timestamp: f64) -> bool {
        let latest = self.guard.borrow().target();
        let result = match run.step(timestamp, latest) {
            FrameStep::Paint(frame) => paint_frame(&self.document, &self.toggle_id, &frame),
            FrameStep::Swap(state, frame) =>
                paint_icon(&self.document, &self.toggle_id, state).and_then(|()| {
                    paint_frame(&self.document, &self.toggle_id, &frame)
                }),
            FrameStep::Finish => {
                self.settle(run);
                return false;
            }
        };
        if let Err(e) = result {
            log::warn!("Icon frame skipped: {}", e);
        }
        true
    }

    fn settle(&self, run: &TransitionRun) {
        let last = self.guard.borrow_mut().finish();
        let result = match run.settle(last) {
            SettleAction::Repaint(state) => paint_icon(&self.document, &self.toggle_id, state),
            SettleAction::Rest => paint_frame(&self.document, &self.toggle_id, &IconFrame::REST),
        };
        if let Err(e) = result {
            log::warn!("Icon settle failed: {}", e);
        }
    }
}

/// Drives one run from `requestAnimationFrame`, re-arming the same callback
/// until the run settles.
fn start_transition(window: &Window, painter: FramePainter, transition: IconTransition) {
    let fallback = painter.clone();
    let holder: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let mut run = TransitionRun::new(transition);

    let cb = Closure::wrap(
        Box::new(move |timestamp: f64| {
            let more = painter.advance(&mut run, timestamp);
            let requested =
                more &&
                holder_for_cb
                    .borrow()
                    .as_ref()
                    .map_or(false, |cb| {
                        window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok()
                    });
            if more && !requested {
                painter.settle(&run);
            }
            if !requested {
                holder_for_cb.borrow_mut().take();
            }
        }) as Box<dyn FnMut(f64)>
    );

    if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *holder.borrow_mut() = Some(cb);
    } else {
        log::warn!("requestAnimationFrame unavailable, swapping icon without animation");
        fallback.settle(&TransitionRun::new(transition));
    }
}

/// Builds the controller for the current page, applies the initial theme
/// and hooks up the toggle, system, storage and page-restore listeners.
pub fn bind_theme_controller(config: ThemeConfig) -> Result<Rc<RefCell<WebThemeController>>, ThemeError> {
    let window = web_sys::window().ok_or_else(|| ThemeError::Dom("no window".to_string()))?;
    let document = window.document().ok_or_else(|| ThemeError::Dom("no document".to_string()))?;

    let store = LocalStore::new(&window);
    let surface = DomSurface::new(window.clone(), document.clone(), &config);
    let controller = Rc::new(RefCell::new(ThemeController::new(store, surface, config.clone())));
    controller.borrow_mut().start();

    match document.get_element_by_id(&config.toggle_id) {
        Some(toggle) => {
            let ctl = controller.clone();
            let on_click = Closure::wrap(
                Box::new(move |_: web_sys::Event| {
                    ctl.borrow_mut().on_manual_toggle();
                }) as Box<dyn FnMut(_)>
            );
            toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            on_click.forget();
        }
        None => log::warn!("No #{} element, manual toggle disabled", config.toggle_id),
    }

    if let Some(query) = window.match_media(DARK_QUERY)? {
        let ctl = controller.clone();
        let on_change = Closure::wrap(
            Box::new(move |event: web_sys::MediaQueryListEvent| {
                ctl.borrow_mut().on_system_preference_change(event.matches());
            }) as Box<dyn FnMut(_)>
        );
        query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
        on_change.forget();
    }

    let ctl = controller.clone();
    let watched = [config.theme_key.clone(), config.source_key.clone()];
    let on_storage = Closure::wrap(
        Box::new(move |event: web_sys::StorageEvent| {
            // `key` is absent when the whole store was cleared.
            let relevant = event.key().map_or(true, |key| watched.contains(&key));
            if relevant {
                ctl.borrow_mut().on_store_changed();
            }
        }) as Box<dyn FnMut(_)>
    );
    window.add_event_listener_with_callback("storage", on_storage.as_ref().unchecked_ref())?;
    on_storage.forget();

    let ctl = controller.clone();
    let on_pageshow = Closure::wrap(
        Box::new(move |event: web_sys::PageTransitionEvent| {
            if event.persisted() {
                ctl.borrow_mut().on_page_restored();
            }
        }) as Box<dyn FnMut(_)>
    );
    window.add_event_listener_with_callback("pageshow", on_pageshow.as_ref().unchecked_ref())?;
    on_pageshow.forget();

    Ok(controller)
}
