use std::f64::consts::PI;

use druid::{widget::prelude::*, Color, Data, KeyOrValue};

use crate::ui::theme;

const PULSE_PERIOD_SECS: f64 = 2.0;
const CORNER_RADIUS: f64 = 6.0;

/// A fixed-size block that slowly pulses, standing in for content that is
/// not there yet.
pub struct Skeleton {
    size: Size,
    color: KeyOrValue<Color>,
    t: f64,
}

impl Skeleton {
    pub fn new(size: impl Into<Size>) -> Self {
        Self {
            size: size.into(),
            color: theme::SKELETON_COLOR.into(),
            t: 0.0,
        }
    }

    fn opacity(&self) -> f64 {
        // Oscillates between 0.5 and 1.0.
        0.75 + 0.25 * (2.0 * PI * self.t).cos()
    }
}

impl<T: Data> Widget<T> for Skeleton {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, _data: &mut T, _env: &Env) {
        if let Event::AnimFrame(interval) = event {
            self.t += (*interval as f64) * 1e-9 / PULSE_PERIOD_SECS;
            if self.t >= 1.0 {
                self.t -= 1.0;
            }
            ctx.request_anim_frame();
            ctx.request_paint();
        }
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, _data: &T, _env: &Env) {
        if let LifeCycle::WidgetAdded = event {
            ctx.request_anim_frame();
        }
    }

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &T, _data: &T, _env: &Env) {}

    fn layout(&mut self, _ctx: &mut LayoutCtx, bc: &BoxConstraints, _data: &T, _env: &Env) -> Size {
        bc.constrain(self.size)
    }

    fn paint(&mut self, ctx: &mut PaintCtx, _data: &T, env: &Env) {
        let color = self.color.resolve(env).with_alpha(self.opacity());
        let rect = ctx.size().to_rounded_rect(CORNER_RADIUS);
        ctx.fill(rect, &color);
    }
}
