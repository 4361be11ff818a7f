// Cancellable hide timers for the timed overlays. Each handle owns its
// Closure so the callback stays alive until it fires or is cancelled.
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

pub struct RevealHandle {
    id: i32,
    _cb: Closure<dyn FnMut()>,
}

#[derive(Default)]
pub struct RevealTimers {
    pub backpack: Option<RevealHandle>,
    pub candle: Option<RevealHandle>,
    pub knife: Option<RevealHandle>,
    pub potion: Option<RevealHandle>,
}

impl RevealTimers {
    pub fn cancel(slot: &mut Option<RevealHandle>) {
        if let Some(handle) = slot.take() {
            if let Some(win) = web_sys::window() {
                win.clear_timeout_with_handle(handle.id);
            }
        }
    }

    /// Replaces whatever timer the slot held; the old one never fires.
    pub fn schedule(
        slot: &mut Option<RevealHandle>,
        delay_ms: i32,
        on_elapsed: impl FnMut() + 'static,
    ) {
        Self::cancel(slot);
        let Some(win) = web_sys::window() else {
            return;
        };
        let cb = Closure::wrap(Box::new(on_elapsed) as Box<dyn FnMut()>);
        if let Ok(id) = win
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), delay_ms)
        {
            *slot = Some(RevealHandle { id, _cb: cb });
        }
    }

    pub fn cancel_all(&mut self) {
        Self::cancel(&mut self.backpack);
        Self::cancel(&mut self.candle);
        Self::cancel(&mut self.knife);
        Self::cancel(&mut self.potion);
    }
}
