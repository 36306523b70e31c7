mod logs;
mod money;
mod months;
mod search;
mod shutdown;
mod template;

pub use self::logs::init_logger;
pub use self::money::format_money;
pub use self::months::last_twelve_months;
pub use self::search::{display_id_suffix, escape_like};
pub use self::shutdown::shutdown_signal;
pub use self::template::{
    OrderConfirmationTemplate, OrderReadyTemplate, render_order_confirmation, render_order_ready,
};
