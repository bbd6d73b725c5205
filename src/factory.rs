//! Widget factory: element record in, widget out.
//!
//! The type tag is matched against a closed set; anything else is a
//! per-element construction failure that the load pass logs and skips
//! without aborting. Cross-cutting attributes (visibility, identity, tooltip
//! text, flags) are applied uniformly here after the type-specific
//! construction, since they belong to every widget regardless of variant.

use thiserror::Error;

use crate::layout::ElementRecord;
use crate::render::UiRect;
use crate::widgets::{Button, Checkbox, ComboBox, Frame, Label, Widget};

/// Per-element construction failures. None of these abort the load pass.
#[derive(Debug, Error)]
pub enum FactoryError {
    #[error("an element without a type can not be created, check the UI layout file")]
    EmptyType,

    #[error("unknown UI element type {0:?}")]
    UnknownType(String),
}

/// Construct exactly one widget from an element record, or fail loudly.
///
/// `visible` is the group's running visibility value at this record, already
/// resolved by the caller (it is a stateful running default, not a per-record
/// property, so the factory cannot derive it from the record alone).
pub fn build(
    type_tag: &str,
    group: &str,
    record: &ElementRecord,
    visible: bool,
) -> Result<Widget, FactoryError> {
    let rect = UiRect::new(record.x, record.y, record.width, record.height);

    let mut widget = match type_tag {
        "" => return Err(FactoryError::EmptyType),
        // ImageButton and TextButton are one variant with two
        // initialization policies, not two widget types.
        "ImageButton" => {
            let mut button = Button::new(rect);
            button.set_sprite_id(&record.sprite_id);
            Widget::Button(button)
        }
        "TextButton" => {
            let mut button = Button::new(rect);
            button.set_label(&record.text);
            Widget::Button(button)
        }
        "Text" => {
            let mut label = Label::new(rect);
            label.set_text(&record.text);
            Widget::Label(label)
        }
        "Frame" => Widget::Frame(Frame::new(rect)),
        "Checkbox" => Widget::Checkbox(Checkbox::new(rect)),
        "ComboBox" => {
            let mut combo = ComboBox::new(rect);
            combo.set_text(&record.text);
            Widget::ComboBox(combo)
        }
        other => return Err(FactoryError::UnknownType(other.to_string())),
    };

    // Cross-cutting attributes, applied regardless of variant.
    let base = widget.base_mut();
    base.visible = visible;
    base.id.clone_from(&record.id);
    base.group = group.to_string();
    base.parent_of.clone_from(&record.parent_of);
    base.tooltip_text.clone_from(&record.tooltip_text);
    base.action_id.clone_from(&record.action);
    base.toggle_button = record.toggle_button;
    base.draw_frame = record.draw_frame;

    Ok(widget)
}
