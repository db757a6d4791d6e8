use std::{sync::Arc, thread};

use druid::{
    BoxConstraints, Data, Env, Event, EventCtx, LayoutCtx, LifeCycle, LifeCycleCtx, PaintCtx,
    Point, Selector, SingleUse, Size, Target, UpdateCtx, Widget, WidgetPod,
};

type AsyncCmdPre<T, U> = Box<dyn Fn(&mut EventCtx, &mut T, U)>;
type AsyncCmdReq<U, V> = Arc<dyn Fn(&U) -> V + Sync + Send + 'static>;
type AsyncCmdRes<T, U, V> = Box<dyn Fn(&mut EventCtx, &mut T, (U, V))>;

/// On `selector`, runs `preflight_fn` on the UI thread, then `request_fn` on
/// a background thread, and hands `(request, response)` to `response_fn`
/// back on the UI thread.
pub struct OnCommandAsync<W, T, U, V> {
    child: WidgetPod<T, W>,
    selector: Selector<U>,
    preflight_fn: AsyncCmdPre<T, U>,
    request_fn: AsyncCmdReq<U, V>,
    response_fn: AsyncCmdRes<T, U, V>,
    pending: Pending,
}

/// Numbers requests so that only the response to the latest one marks the
/// widget as idle.
#[derive(Default)]
struct Pending {
    next: u64,
    latest: Option<u64>,
}

impl Pending {
    /// Returns the token of the new request and whether an older request was
    /// still outstanding.
    fn start(&mut self) -> (u64, bool) {
        let token = self.next;
        self.next += 1;
        let superseded = self.latest.replace(token).is_some();
        (token, superseded)
    }

    fn finish(&mut self, token: u64) {
        if self.latest == Some(token) {
            self.latest = None;
        }
    }
}

impl<W, T, U, V> OnCommandAsync<W, T, U, V>
where
    W: Widget<T>,
{
    const RESPONSE: Selector<SingleUse<(u64, (U, V))>> = Selector::new("on_cmd_async.response");

    pub fn new(
        child: W,
        selector: Selector<U>,
        preflight_fn: AsyncCmdPre<T, U>,
        request_fn: AsyncCmdReq<U, V>,
        response_fn: AsyncCmdRes<T, U, V>,
    ) -> Self {
        Self {
            child: WidgetPod::new(child),
            selector,
            preflight_fn,
            request_fn,
            response_fn,
            pending: Pending::default(),
        }
    }
}

impl<W, T, U, V> Widget<T> for OnCommandAsync<W, T, U, V>
where
    W: Widget<T>,
    T: Data,
    U: Send + Clone + 'static,
    V: Send + 'static,
{
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        match event {
            Event::Command(cmd) if cmd.is(self.selector) => {
                let req = cmd.get_unchecked(self.selector);

                (self.preflight_fn)(ctx, data, req.to_owned());

                let (token, superseded) = self.pending.start();
                if superseded {
                    // The previous request keeps running, its response is
                    // expected to be ignored by `response_fn`.
                    log::debug!("async action superseded while pending");
                }
                thread::spawn({
                    let req_fn = self.request_fn.clone();
                    let req = req.to_owned();
                    let sink = ctx.get_external_handle();
                    let self_id = ctx.widget_id();

                    move || {
                        let res = req_fn(&req);
                        if let Err(err) = sink.submit_command(
                            Self::RESPONSE,
                            SingleUse::new((token, (req, res))),
                            Target::Widget(self_id),
                        ) {
                            log::error!("failed to deliver async response: {err}");
                        }
                    }
                });
                ctx.set_handled();
            }
            Event::Command(cmd) if cmd.is(Self::RESPONSE) => {
                if let Some((token, res)) = cmd.get_unchecked(Self::RESPONSE).take() {
                    self.pending.finish(token);
                    (self.response_fn)(ctx, data, res);
                }
                ctx.set_handled();
            }
            _ => {
                self.child.event(ctx, event, data, env);
            }
        }
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &T, env: &Env) {
        self.child.lifecycle(ctx, event, data, env);
    }

    fn update(&mut self, ctx: &mut UpdateCtx, _old_data: &T, data: &T, env: &Env) {
        self.child.update(ctx, data, env);
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &T, env: &Env) -> Size {
        let size = self.child.layout(ctx, bc, data, env);
        self.child.set_origin(ctx, Point::ORIGIN);
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &T, env: &Env) {
        self.child.paint(ctx, data, env);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn late_response_keeps_newer_request_pending() {
        let mut pending = Pending::default();
        let (first, superseded) = pending.start();
        assert!(!superseded);
        let (second, superseded) = pending.start();
        assert!(superseded);

        // The first response arrives after the second request was issued.
        pending.finish(first);
        let (_, superseded) = pending.start();
        assert!(superseded, "second request is still outstanding");

        pending.finish(second);
        assert!(pending.latest.is_some());
    }

    #[test]
    fn latest_response_clears_pending() {
        let mut pending = Pending::default();
        let (token, _) = pending.start();
        pending.finish(token);
        let (_, superseded) = pending.start();
        assert!(!superseded);
    }
}
