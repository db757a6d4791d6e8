use druid::{widget::prelude::*, Data, Point, WidgetExt, WidgetPod};
#[cfg(test)]
use druid::WidgetId;

type EmptyMaker = Box<dyn Fn() -> Box<dyn Widget<()>>>;

use crate::data::{Promise, PromiseState};

/// Shows one of the child widgets depending on the state of a `Promise`.
/// `Promise::Empty` shows nothing unless a widget is set with
/// [`Async::with_empty`].
pub struct Async<T, D, E> {
    empty_maker: Option<EmptyMaker>,
    def_maker: Box<dyn Fn() -> Box<dyn Widget<D>>>,
    res_maker: Box<dyn Fn() -> Box<dyn Widget<T>>>,
    err_maker: Box<dyn Fn() -> Box<dyn Widget<E>>>,
    widget: PromiseWidget<T, D, E>,
}

#[allow(clippy::large_enum_variant)]
enum PromiseWidget<T, D, E> {
    Empty(Option<WidgetPod<(), Box<dyn Widget<()>>>>),
    Deferred(WidgetPod<D, Box<dyn Widget<D>>>),
    Resolved(WidgetPod<T, Box<dyn Widget<T>>>),
    Rejected(WidgetPod<E, Box<dyn Widget<E>>>),
}

impl<D: Data, T: Data, E: Data> Async<T, D, E> {
    pub fn new<WD, WT, WE>(
        def_maker: impl Fn() -> WD + 'static,
        res_maker: impl Fn() -> WT + 'static,
        err_maker: impl Fn() -> WE + 'static,
    ) -> Self
    where
        WD: Widget<D> + 'static,
        WT: Widget<T> + 'static,
        WE: Widget<E> + 'static,
    {
        Self {
            empty_maker: None,
            def_maker: Box::new(move || def_maker().boxed()),
            res_maker: Box::new(move || res_maker().boxed()),
            err_maker: Box::new(move || err_maker().boxed()),
            widget: PromiseWidget::Empty(None),
        }
    }

    pub fn with_empty<WE>(mut self, empty_maker: impl Fn() -> WE + 'static) -> Self
    where
        WE: Widget<()> + 'static,
    {
        self.empty_maker = Some(Box::new(move || empty_maker().boxed()));
        self
    }

    pub(crate) fn rebuild_widget(&mut self, state: PromiseState) {
        self.widget = match state {
            PromiseState::Empty => {
                PromiseWidget::Empty(self.empty_maker.as_ref().map(|m| WidgetPod::new(m())))
            }
            PromiseState::Deferred => PromiseWidget::Deferred(WidgetPod::new((self.def_maker)())),
            PromiseState::Resolved => PromiseWidget::Resolved(WidgetPod::new((self.res_maker)())),
            PromiseState::Rejected => PromiseWidget::Rejected(WidgetPod::new((self.err_maker)())),
        };
    }
}

#[cfg(test)]
impl<T, D, E> Async<T, D, E> {
    /// Id of the child built for the current state.
    pub(crate) fn child_id(&self) -> Option<WidgetId> {
        match &self.widget {
            PromiseWidget::Empty(widget) => widget.as_ref().map(|w| w.id()),
            PromiseWidget::Deferred(widget) => Some(widget.id()),
            PromiseWidget::Resolved(widget) => Some(widget.id()),
            PromiseWidget::Rejected(widget) => Some(widget.id()),
        }
    }
}

impl<D: Data, T: Data, E: Data> Widget<Promise<T, D, E>> for Async<T, D, E> {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut Promise<T, D, E>, env: &Env) {
        if data.state() == self.widget.state() {
            match data {
                Promise::Empty => {
                    self.widget.with_empty(|w| w.event(ctx, event, &mut (), env));
                }
                Promise::Deferred { def } => {
                    self.widget.with_deferred(|w| w.event(ctx, event, def, env));
                }
                Promise::Resolved { val, .. } => {
                    self.widget.with_resolved(|w| w.event(ctx, event, val, env));
                }
                Promise::Rejected { err, .. } => {
                    self.widget.with_rejected(|w| w.event(ctx, event, err, env));
                }
            };
        }
    }

    fn lifecycle(
        &mut self,
        ctx: &mut LifeCycleCtx,
        event: &LifeCycle,
        data: &Promise<T, D, E>,
        env: &Env,
    ) {
        if matches!(event, LifeCycle::WidgetAdded) || data.state() != self.widget.state() {
            // possible if getting lifecycle after an event that changed the data,
            // or on WidgetAdded
            self.rebuild_widget(data.state());
        }
        match data {
            Promise::Empty => {
                self.widget.with_empty(|w| w.lifecycle(ctx, event, &(), env));
            }
            Promise::Deferred { def } => {
                self.widget
                    .with_deferred(|w| w.lifecycle(ctx, event, def, env));
            }
            Promise::Resolved { val, .. } => {
                self.widget
                    .with_resolved(|w| w.lifecycle(ctx, event, val, env));
            }
            Promise::Rejected { err, .. } => {
                self.widget
                    .with_rejected(|w| w.lifecycle(ctx, event, err, env));
            }
        };
    }

    fn update(
        &mut self,
        ctx: &mut UpdateCtx,
        old_data: &Promise<T, D, E>,
        data: &Promise<T, D, E>,
        env: &Env,
    ) {
        if old_data.state() != data.state() {
            self.rebuild_widget(data.state());
            ctx.children_changed();
        } else {
            match data {
                Promise::Empty => {
                    self.widget.with_empty(|w| w.update(ctx, &(), env));
                }
                Promise::Deferred { def } => {
                    self.widget.with_deferred(|w| w.update(ctx, def, env));
                }
                Promise::Resolved { val, .. } => {
                    self.widget.with_resolved(|w| w.update(ctx, val, env));
                }
                Promise::Rejected { err, .. } => {
                    self.widget.with_rejected(|w| w.update(ctx, err, env));
                }
            };
        }
    }

    fn layout(
        &mut self,
        ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        data: &Promise<T, D, E>,
        env: &Env,
    ) -> Size {
        match data {
            Promise::Empty => self.widget.with_empty(|w| {
                let size = w.layout(ctx, bc, &(), env);
                w.set_origin(ctx, Point::ORIGIN);
                size
            }),
            Promise::Deferred { def } => self.widget.with_deferred(|w| {
                let size = w.layout(ctx, bc, def, env);
                w.set_origin(ctx, Point::ORIGIN);
                size
            }),
            Promise::Resolved { val, .. } => self.widget.with_resolved(|w| {
                let size = w.layout(ctx, bc, val, env);
                w.set_origin(ctx, Point::ORIGIN);
                size
            }),
            Promise::Rejected { err, .. } => self.widget.with_rejected(|w| {
                let size = w.layout(ctx, bc, err, env);
                w.set_origin(ctx, Point::ORIGIN);
                size
            }),
        }
        .unwrap_or_default()
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &Promise<T, D, E>, env: &Env) {
        match data {
            Promise::Empty => {
                self.widget.with_empty(|w| w.paint(ctx, &(), env));
            }
            Promise::Deferred { def } => {
                self.widget.with_deferred(|w| w.paint(ctx, def, env));
            }
            Promise::Resolved { val, .. } => {
                self.widget.with_resolved(|w| w.paint(ctx, val, env));
            }
            Promise::Rejected { err, .. } => {
                self.widget.with_rejected(|w| w.paint(ctx, err, env));
            }
        };
    }
}

impl<T, D, E> PromiseWidget<T, D, E> {
    fn state(&self) -> PromiseState {
        match self {
            Self::Empty(_) => PromiseState::Empty,
            Self::Deferred(_) => PromiseState::Deferred,
            Self::Resolved(_) => PromiseState::Resolved,
            Self::Rejected(_) => PromiseState::Rejected,
        }
    }

    fn with_empty<R, F: FnOnce(&mut WidgetPod<(), Box<dyn Widget<()>>>) -> R>(
        &mut self,
        f: F,
    ) -> Option<R> {
        if let Self::Empty(Some(widget)) = self {
            Some(f(widget))
        } else {
            None
        }
    }

    fn with_deferred<R, F: FnOnce(&mut WidgetPod<D, Box<dyn Widget<D>>>) -> R>(
        &mut self,
        f: F,
    ) -> Option<R> {
        if let Self::Deferred(widget) = self {
            Some(f(widget))
        } else {
            None
        }
    }

    fn with_resolved<R, F: FnOnce(&mut WidgetPod<T, Box<dyn Widget<T>>>) -> R>(
        &mut self,
        f: F,
    ) -> Option<R> {
        if let Self::Resolved(widget) = self {
            Some(f(widget))
        } else {
            None
        }
    }

    fn with_rejected<R, F: FnOnce(&mut WidgetPod<E, Box<dyn Widget<E>>>) -> R>(
        &mut self,
        f: F,
    ) -> Option<R> {
        if let Self::Rejected(widget) = self {
            Some(f(widget))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use druid::widget::SizedBox;

    use super::*;

    const EMPTY: WidgetId = WidgetId::reserved(101);
    const DEFERRED: WidgetId = WidgetId::reserved(102);
    const RESOLVED: WidgetId = WidgetId::reserved(103);
    const REJECTED: WidgetId = WidgetId::reserved(104);

    fn async_widget() -> Async<u32, u32, u32> {
        Async::new(
            || SizedBox::empty().with_id(DEFERRED),
            || SizedBox::empty().with_id(RESOLVED),
            || SizedBox::empty().with_id(REJECTED),
        )
    }

    #[test]
    fn builds_child_for_each_state() {
        let mut widget = async_widget();
        for (state, id) in [
            (PromiseState::Deferred, DEFERRED),
            (PromiseState::Resolved, RESOLVED),
            (PromiseState::Rejected, REJECTED),
        ] {
            widget.rebuild_widget(state);
            assert_eq!(widget.child_id(), Some(id));
        }
    }

    #[test]
    fn empty_shows_nothing_by_default() {
        let mut widget = async_widget();
        widget.rebuild_widget(PromiseState::Empty);
        assert_eq!(widget.child_id(), None);

        let mut widget = async_widget().with_empty(|| SizedBox::empty().with_id(EMPTY));
        widget.rebuild_widget(PromiseState::Empty);
        assert_eq!(widget.child_id(), Some(EMPTY));
    }
}
