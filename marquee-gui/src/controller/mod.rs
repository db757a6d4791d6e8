mod input;
mod nav;
mod on_command_async;

pub use input::InputController;
pub use nav::NavController;
pub use on_command_async::OnCommandAsync;
