use std::marker::PhantomData;
use std::sync::mpsc::{channel, Sender};
use std::sync::Arc;

/// Elm-style loop: effects run on their own threads and report back as events,
/// while state transitions happen one event at a time on the calling thread.
#[derive(Debug, Clone)]
pub struct StateMachine<TState, TEvent, TEffect, T, R, E, D>
where
    T: Fn(TState, TEvent) -> (TState, Vec<TEffect>) + Send + Sync,
    R: Fn(&TState) + Send + Sync,
    E: Fn(TEffect, Sender<TEvent>) + Send + Sync,
    D: Fn(&TState) -> bool,
{
    pub init: (TState, Vec<TEffect>),
    pub transition_fn: Arc<T>,
    pub render_fn: Arc<R>,
    pub run_effect_fn: Arc<E>,
    pub is_done_fn: D,
    _event: PhantomData<TEvent>,
}

impl<TState, TEvent, TEffect, T, R, E, D> StateMachine<TState, TEvent, TEffect, T, R, E, D>
where
    TState: Clone + Send + 'static,
    TEvent: Send + 'static,
    TEffect: Clone + Send + 'static,
    T: Fn(TState, TEvent) -> (TState, Vec<TEffect>) + Send + Sync + 'static,
    R: Fn(&TState) + Send + Sync + 'static,
    E: Fn(TEffect, Sender<TEvent>) + Send + Sync + 'static,
    D: Fn(&TState) -> bool,
{
    pub fn new(
        init: (TState, Vec<TEffect>),
        transition_fn: T,
        render_fn: R,
        run_effect_fn: E,
        is_done_fn: D,
    ) -> Self {
        Self {
            init,
            transition_fn: Arc::new(transition_fn),
            render_fn: Arc::new(render_fn),
            run_effect_fn: Arc::new(run_effect_fn),
            is_done_fn,
            _event: PhantomData,
        }
    }

    /// Runs until the state is done and returns it.
    pub fn run(&self) -> Result<TState, Box<dyn std::error::Error + Send + Sync>> {
        let (event_sender, event_receiver) = channel();
        let (mut state, effects) = self.init.clone();

        (self.render_fn)(&state);

        if (self.is_done_fn)(&state) {
            return Ok(state);
        }

        self.spawn_effects(effects, &event_sender);

        loop {
            let event = event_receiver.recv()?;

            let (new_state, new_effects) = (self.transition_fn)(state, event);
            state = new_state;

            (self.render_fn)(&state);

            if (self.is_done_fn)(&state) {
                return Ok(state);
            }

            self.spawn_effects(new_effects, &event_sender);
        }
    }

    fn spawn_effects(&self, effects: Vec<TEffect>, event_sender: &Sender<TEvent>) {
        for effect in effects {
            let effect_sender = event_sender.clone();
            let run_effect_fn = Arc::clone(&self.run_effect_fn);
            std::thread::spawn(move || {
                run_effect_fn(effect, effect_sender);
            });
        }
    }
}
