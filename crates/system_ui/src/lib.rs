//! Shared UI primitive library for the desktop shell and its built-in apps.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the stable `data-ui-*`
//! DOM contract consumed by the shell stylesheet. Apps compose these primitives instead of
//! emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, Cluster, DesktopBackdrop, DesktopIconButton,
    DesktopIconGrid, DesktopRoot, DesktopWindowLayer, DismissLayer, FieldGroup, Grid, Heading,
    LayoutAlign, LayoutGap, MenuItem, MenuSurface, Panel, ProgressBar, RangeField, ResizeHandle,
    Stack, Switch, Taskbar, TaskbarButton, TaskbarSection, Text, TextArea, TextField, TextRole,
    TextTone, Toast, ToastRegion, ToastTone, WindowBody, WindowControlButton, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};

/// Glob import for apps that compose many primitives.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonSize, ButtonVariant, Cluster, FieldGroup, Grid, Heading, Icon,
        IconName, IconSize, LayoutAlign, LayoutGap, Panel, ProgressBar, RangeField, Stack, Switch,
        Text, TextArea, TextField, TextRole, TextTone, Toast, ToastRegion, ToastTone,
    };
}
