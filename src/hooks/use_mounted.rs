use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

/// `true` mientras el componente esté montado. Las respuestas de red que
/// llegan después del desmontaje se descartan consultándolo.
#[derive(Clone)]
pub struct MountedFlag(Rc<RefCell<bool>>);

impl MountedFlag {
    pub fn is_mounted(&self) -> bool {
        *self.0.borrow()
    }
}

#[hook]
pub fn use_mounted() -> MountedFlag {
    let flag = use_mut_ref(|| true);

    {
        let flag = flag.clone();
        use_effect_with((), move |_| {
            *flag.borrow_mut() = true;
            move || *flag.borrow_mut() = false
        });
    }

    MountedFlag(flag)
}
