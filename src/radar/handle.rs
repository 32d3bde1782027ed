use super::host::{Clock, FrameScheduler, HostContainer, RadarSurface};
use super::model::{Radar, RadarConfig};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadarState {
    Running,
    Stopped,
}

struct Animation<C: HostContainer, S: FrameScheduler, K: Clock> {
    radar: Radar,
    container: C,
    surface: C::Surface,
    scheduler: S,
    clock: K,
    pending: Option<S::Handle>,
    state: RadarState,
}

/// Mounts a radar into `container` and starts animating it.
///
/// The first step runs immediately; every later step is requested from `scheduler`.
pub fn create<C, S, K>(config: RadarConfig, container: C, scheduler: S, clock: K) -> RadarHandle
where
    C: HostContainer + 'static,
    C::Surface: 'static,
    S: FrameScheduler + 'static,
    S::Handle: 'static,
    K: Clock + 'static,
{
    let surface = container.create_surface(config.size);
    if let Err(e) = container.attach(&surface) {
        log::debug!("Radar surface not attached: {}", e);
    }

    let radar = Radar::new(&config, clock.now_ms());
    log::debug!(
        "Radar created: {} slots, {:.0}px, {:.0}ms per turn",
        radar.slot_count(),
        config.size,
        config.full_turn_ms()
    );

    let animation = Rc::new(RefCell::new(Animation {
        radar,
        container,
        surface,
        scheduler,
        clock,
        pending: None,
        state: RadarState::Running,
    }));
    animate(&animation);

    RadarHandle { inner: animation }
}

fn animate<C, S, K>(this: &Rc<RefCell<Animation<C, S, K>>>)
where
    C: HostContainer + 'static,
    C::Surface: 'static,
    S: FrameScheduler + 'static,
    S::Handle: 'static,
    K: Clock + 'static,
{
    let mut guard = this.borrow_mut();
    let animation = &mut *guard;
    if animation.state == RadarState::Stopped {
        return;
    }
    animation.pending = None;

    let now = animation.clock.now_ms();
    animation.radar.advance(now);
    animation.surface.present(&animation.radar);

    let weak: Weak<RefCell<Animation<C, S, K>>> = Rc::downgrade(this);
    let handle = animation.scheduler.request_frame(Box::new(move || {
        if let Some(this) = weak.upgrade() {
            animate(&this);
        }
    }));
    animation.pending = Some(handle);
}

trait Teardown {
    fn teardown(&self);
    fn state(&self) -> RadarState;
    fn radar(&self) -> Radar;
}

impl<C: HostContainer, S: FrameScheduler, K: Clock> Teardown for RefCell<Animation<C, S, K>> {
    fn teardown(&self) {
        let mut animation = self.borrow_mut();
        if animation.state == RadarState::Stopped {
            return;
        }
        animation.state = RadarState::Stopped;
        if let Some(handle) = animation.pending.take() {
            animation.scheduler.cancel_frame(handle);
        }
        if let Err(e) = animation.container.detach(&animation.surface) {
            log::debug!("Radar surface not detached: {}", e);
        }
        log::debug!("Radar destroyed");
    }

    fn state(&self) -> RadarState {
        self.borrow().state
    }

    fn radar(&self) -> Radar {
        self.borrow().radar.clone()
    }
}

/// Owner of a mounted radar. Destroys it when dropped.
pub struct RadarHandle {
    inner: Rc<dyn Teardown>,
}

impl RadarHandle {
    /// Cancels the pending frame and detaches the surface. Safe to call repeatedly.
    pub fn destroy(&self) {
        self.inner.teardown();
    }

    pub fn state(&self) -> RadarState {
        self.inner.state()
    }

    /// Copy of the current sweep state.
    pub fn snapshot(&self) -> Radar {
        self.inner.radar()
    }
}

impl Drop for RadarHandle {
    fn drop(&mut self) {
        self.destroy();
    }
}
