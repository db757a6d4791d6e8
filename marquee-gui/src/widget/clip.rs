use druid::{widget::prelude::*, Data, KeyOrValue, RoundedRectRadii};

/// Paints `inner` clipped to its own bounds with rounded corners.
pub struct RoundedClip<W> {
    radius: KeyOrValue<RoundedRectRadii>,
    inner: W,
}

impl<W> RoundedClip<W> {
    pub fn new(radius: impl Into<KeyOrValue<RoundedRectRadii>>, inner: W) -> Self {
        Self {
            radius: radius.into(),
            inner,
        }
    }
}

impl<T: Data, W: Widget<T>> Widget<T> for RoundedClip<W> {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        self.inner.event(ctx, event, data, env)
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &T, env: &Env) {
        self.inner.lifecycle(ctx, event, data, env)
    }

    fn update(&mut self, ctx: &mut UpdateCtx, old_data: &T, data: &T, env: &Env) {
        self.inner.update(ctx, old_data, data, env)
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &T, env: &Env) -> Size {
        self.inner.layout(ctx, bc, data, env)
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &T, env: &Env) {
        let shape = ctx.size().to_rounded_rect(self.radius.resolve(env));
        ctx.with_save(|ctx| {
            ctx.clip(shape);
            self.inner.paint(ctx, data, env);
        });
    }
}
