use gloo_timers::callback::Timeout;

/// Tareas diferidas que no dependen de la vida de ningún componente
pub trait Scheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// `setTimeout` del navegador. El temporizador se suelta (`forget`) para que
/// desmontar la pantalla que lo programó no lo cancele.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}
