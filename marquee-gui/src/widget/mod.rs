mod clip;
pub mod icons;
mod link;
mod promise;
pub mod remote_image;
mod skeleton;

use std::sync::Arc;

use druid::{Data, EventCtx, Selector, Widget};

use crate::controller::OnCommandAsync;

pub use clip::RoundedClip;
pub use link::Link;
pub use promise::Async;
pub use remote_image::RemoteImage;
pub use skeleton::Skeleton;

pub trait MyWidgetExt<T: Data>: Widget<T> + Sized + 'static {
    fn link(self) -> Link<T> {
        Link::new(self)
    }

    fn on_command_async<U, V>(
        self,
        selector: Selector<U>,
        request: impl Fn(&U) -> V + Sync + Send + 'static,
        preflight: impl Fn(&mut EventCtx, &mut T, U) + 'static,
        response: impl Fn(&mut EventCtx, &mut T, (U, V)) + 'static,
    ) -> OnCommandAsync<Self, T, U, V>
    where
        U: Send + Clone + 'static,
        V: Send + 'static,
    {
        OnCommandAsync::new(
            self,
            selector,
            Box::new(preflight),
            Arc::new(request),
            Box::new(response),
        )
    }
}

impl<T: Data, W: Widget<T> + 'static> MyWidgetExt<T> for W {}
