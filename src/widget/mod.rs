mod map_widget;

pub use map_widget::{MapWidget, MapWidgetContext, Media, Script, ScriptLoading, TEMPLATE_NAME};
