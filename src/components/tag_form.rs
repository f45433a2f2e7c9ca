//! Tag create/edit dialog and the label color generator.
//!
//! Backgrounds are random but pastel-leaning; the text color is not
//! stored as a preference, it is derived from the background's
//! perceived brightness so the label stays readable.

#[cfg(test)]
#[path = "tag_form_test.rs"]
mod tag_form_test;

use leptos::prelude::*;
use thiserror::Error;

use crate::components::modal::Modal;
use crate::net;
use crate::net::client::{Api, ApiContext};
use crate::net::types::{NewTag, Tag};
use crate::state::caches::Caches;
use crate::state::toasts::{self, ToastKind, ToastState};

/// Longest accepted tag name, in characters.
pub const MAX_NAME_CHARS: usize = 50;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TagFormError {
    #[error("name is required")]
    EmptyName,
    #[error("name is limited to 50 characters")]
    NameTooLong,
}

/// Black or white, whichever stays readable on the given background.
///
/// Uses the ITU-R 601 luma weights; anything brighter than the midpoint
/// gets black text.
pub fn text_color_for(r: u8, g: u8, b: u8) -> &'static str {
    let brightness = (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000;
    if brightness > 128 { "#000000" } else { "#ffffff" }
}

pub fn hex_color(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

// Channels are clamped into the upper half so the background reads as
// a tint rather than a saturated block.
fn pastel_channel(byte: u8) -> u8 {
    128 + byte % 100
}

/// A fresh `(background, text)` color pair.
pub fn random_colors() -> (String, String) {
    let bytes = *uuid::Uuid::new_v4().as_bytes();
    let (r, g, b) = (
        pastel_channel(bytes[0]),
        pastel_channel(bytes[1]),
        pastel_channel(bytes[2]),
    );
    (hex_color(r, g, b), text_color_for(r, g, b).to_owned())
}

/// What the dialog edits; colors are regenerated as a pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagDraft {
    pub name: String,
    pub color_bg: String,
    pub color_text: String,
}

impl TagDraft {
    pub fn new() -> Self {
        let (color_bg, color_text) = random_colors();
        Self {
            name: String::new(),
            color_bg,
            color_text,
        }
    }

    pub fn from_tag(tag: &Tag) -> Self {
        Self {
            name: tag.name.clone(),
            color_bg: tag.color_bg.clone(),
            color_text: tag.color_text.clone(),
        }
    }

    pub fn reroll_colors(&mut self) {
        let (color_bg, color_text) = random_colors();
        self.color_bg = color_bg;
        self.color_text = color_text;
    }

    pub fn validate(&self) -> Result<NewTag, TagFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(TagFormError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_CHARS {
            return Err(TagFormError::NameTooLong);
        }
        Ok(NewTag {
            name: name.to_owned(),
            color_bg: self.color_bg.clone(),
            color_text: self.color_text.clone(),
        })
    }
}

impl Default for TagDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// Dialog for creating a tag, or editing one when `existing` is set.
#[component]
pub fn TagForm(
    #[prop(optional_no_strip)] existing: Option<Tag>,
    on_close: Callback<()>,
) -> impl IntoView {
    let api = expect_context::<ApiContext>();
    let caches = expect_context::<Caches>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let editing = existing.as_ref().map(|tag| tag.id.clone());
    let title = if editing.is_some() { "Edit tag" } else { "New tag" };
    let draft = RwSignal::new(existing.as_ref().map_or_else(TagDraft::new, TagDraft::from_tag));
    let error = RwSignal::new(None::<TagFormError>);
    let saving = RwSignal::new(false);

    let submit = Callback::new(move |_: ()| {
        if saving.get_untracked() {
            return;
        }
        match draft.with_untracked(TagDraft::validate) {
            Err(err) => error.set(Some(err)),
            Ok(new_tag) => {
                error.set(None);
                saving.set(true);
                let api = api.with_value(Api::clone);
                let editing = editing.clone();
                leptos::task::spawn_local(async move {
                    let result = match editing.as_deref() {
                        Some(id) => net::tags::update(&api, id, &new_tag).await,
                        None => net::tags::create(&api, &new_tag).await,
                    };
                    match result {
                        Ok(tag) => {
                            let was_edit = editing.is_some();
                            caches.tags.update(|t| {
                                if was_edit {
                                    t.replace(tag);
                                } else {
                                    t.append(tag);
                                }
                            });
                            saving.set(false);
                            toasts::show(
                                toasts,
                                ToastKind::Success,
                                if was_edit { "Tag updated" } else { "Tag created" },
                            );
                            on_close.run(());
                        }
                        Err(err) => {
                            log::warn!("tag save failed: {err}");
                            saving.set(false);
                            toasts::show(toasts, ToastKind::Error, &err.to_string());
                        }
                    }
                });
            }
        }
    });

    view! {
        <Modal title=title on_close=on_close>
            <label class="dialog__label">
                "Name"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.name = value);
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </label>
            <div class="tag-form__preview">
                <span
                    class="tag-chip"
                    style:background-color=move || draft.with(|d| d.color_bg.clone())
                    style:color=move || draft.with(|d| d.color_text.clone())
                >
                    {move || {
                        let name = draft.with(|d| d.name.trim().to_owned());
                        if name.is_empty() { "Preview".to_owned() } else { name }
                    }}
                </span>
                <button class="btn" on:click=move |_| draft.update(TagDraft::reroll_colors)>
                    "New colors"
                </button>
            </div>
            {move || {
                error
                    .get()
                    .map(|err| view! { <p class="dialog__error">{err.to_string()}</p> })
            }}
            <div class="dialog__actions">
                <button class="btn" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button
                    class="btn btn--primary"
                    disabled=move || saving.get()
                    on:click=move |_| submit.run(())
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </Modal>
    }
}
