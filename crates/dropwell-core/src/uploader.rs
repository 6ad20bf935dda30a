//! Drag-and-drop upload target.
//!
//! [`Uploader`] is a two-state machine (`Idle`, `DragOver`) driven by
//! the host's drag events, plus a delivery path shared by drops and the
//! fallback file picker:
//!
//! ```text
//! Idle     --drag_enter-->    DragOver
//! Idle     --drag_over-->     DragOver
//! DragOver --drag_leave-->    Idle      (once every enter is matched)
//! DragOver --drag_end-->      Idle
//! DragOver --drop_files-->    Idle      (callback fires)
//! Idle     --manual_select--> Idle      (callback fires)
//! ```
//!
//! Browsers fire `dragenter`/`dragleave` for every child element the
//! pointer crosses, and the events bubble to the target. The uploader
//! counts unmatched enters so crossing onto a child (enter on the child,
//! then leave on the parent) keeps it in `DragOver`.
//!
//! Observers subscribe to state transitions explicitly; `drag_over`
//! (browsers fire `dragover` continuously) does not notify again.

use std::fmt;

use crate::config::{EmptyDropPolicy, UploaderConfig};
use crate::filename::filename_from_path;
use crate::instance::InstanceId;
use crate::types::{DragState, SelectedFile, UploadError};

/// A host file handle that knows its own name.
pub trait NamedFile {
    /// The file's name as reported by the host (no directories).
    fn file_name(&self) -> String;
}

impl NamedFile for String {
    fn file_name(&self) -> String {
        filename_from_path(self).to_owned()
    }
}

/// Handle returned by [`Uploader::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(DragState)>;
type FileCallback<F> = Box<dyn FnMut(SelectedFile<F>)>;

/// A drop target that forwards the first arriving file to a callback.
pub struct Uploader<F> {
    id: InstanceId,
    config: UploaderConfig,
    state: DragState,
    depth: u32,
    on_file_changed: FileCallback<F>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<F> fmt::Debug for Uploader<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uploader")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("depth", &self.depth)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl<F: NamedFile> Uploader<F> {
    /// Create an idle uploader with a freshly allocated [`InstanceId`].
    ///
    /// `on_file_changed` receives every delivered file. It is called
    /// synchronously from [`drop_files`](Self::drop_files) and
    /// [`manual_select`](Self::manual_select).
    pub fn new(
        config: UploaderConfig,
        on_file_changed: impl FnMut(SelectedFile<F>) + 'static,
    ) -> Self {
        Self {
            id: InstanceId::next(),
            config,
            state: DragState::Idle,
            depth: 0,
            on_file_changed: Box::new(on_file_changed),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// This instance's identifier.
    #[must_use]
    pub const fn id(&self) -> InstanceId {
        self.id
    }

    /// The configuration this uploader was created with.
    #[must_use]
    pub const fn config(&self) -> &UploaderConfig {
        &self.config
    }

    /// Current drag state.
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// Whether a drag is currently over the target.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// CSS class to add to the target for the current state.
    ///
    /// Empty while idle.
    #[must_use]
    pub fn active_class(&self) -> &str {
        if self.is_active() {
            &self.config.active_class
        } else {
            ""
        }
    }

    /// Register a listener for drag state transitions.
    pub fn subscribe(&mut self, listener: impl FnMut(DragState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    /// A drag carrying data entered the target or one of its children.
    ///
    /// The host must also suppress the browser's default handling,
    /// otherwise the drop is refused.
    pub fn drag_enter(&mut self) {
        self.depth = self.depth.saturating_add(1);
        self.set_state(DragState::DragOver);
    }

    /// A drag is moving over the target.
    ///
    /// Does not count as an enter. Recovers `DragOver` if the matching
    /// enter was never seen.
    pub fn drag_over(&mut self) {
        if self.depth == 0 {
            self.depth = 1;
        }
        self.set_state(DragState::DragOver);
    }

    /// The drag left the target or one of its children.
    ///
    /// Returns to `Idle` only once every enter has been matched by a
    /// leave.
    pub fn drag_leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        if self.depth == 0 {
            self.set_state(DragState::Idle);
        }
    }

    /// The drag gesture ended (cancelled with Escape, dropped elsewhere).
    pub fn drag_end(&mut self) {
        self.reset();
    }

    /// Files were dropped on the target.
    ///
    /// Always returns to `Idle`. Delivers the first file, if any, and
    /// returns whether a file was delivered.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::EmptyPayload`] for a drop without files when
    /// the policy is [`EmptyDropPolicy::Reject`], and
    /// [`UploadError::UnsupportedType`] when the first file's extension is
    /// not accepted.
    pub fn drop_files(
        &mut self,
        files: impl IntoIterator<Item = F>,
    ) -> Result<bool, UploadError> {
        self.reset();

        let Some(file) = files.into_iter().next() else {
            return match self.config.empty_drop {
                EmptyDropPolicy::Ignore => Ok(false),
                EmptyDropPolicy::Reject => Err(UploadError::EmptyPayload),
            };
        };
        let filename = file.file_name();
        self.deliver(file, filename)
    }

    /// A file was picked through the fallback file input.
    ///
    /// `input_value` is the input element's value (usually a fake path);
    /// its final segment becomes the filename. When the host reports an
    /// empty value the file's own name is used instead. An empty file list
    /// (picker dismissed) is not an error. The drag state is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::UnsupportedType`] when the extension is not
    /// accepted.
    pub fn manual_select(
        &mut self,
        files: impl IntoIterator<Item = F>,
        input_value: &str,
    ) -> Result<bool, UploadError> {
        let Some(file) = files.into_iter().next() else {
            return Ok(false);
        };
        let filename = if input_value.is_empty() {
            file.file_name()
        } else {
            filename_from_path(input_value).to_owned()
        };
        self.deliver(file, filename)
    }

    fn deliver(&mut self, file: F, filename: String) -> Result<bool, UploadError> {
        if !self.config.accepts(&filename) {
            return Err(UploadError::UnsupportedType(filename));
        }
        (self.on_file_changed)(SelectedFile { file, filename });
        Ok(true)
    }

    fn reset(&mut self) {
        self.depth = 0;
        self.set_state(DragState::Idle);
    }

    fn set_state(&mut self, next: DragState) {
        if self.state == next {
            return;
        }
        self.state = next;
        for (_, listener) in &mut self.listeners {
            listener(next);
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    type Log = Rc<RefCell<Vec<(String, String)>>>;

    fn recording(config: UploaderConfig) -> (Uploader<String>, Log) {
        let log: Log = Rc::default();
        let sink = Rc::clone(&log);
        let uploader = Uploader::new(config, move |selected: SelectedFile<String>| {
            sink.borrow_mut().push((selected.file, selected.filename));
        });
        (uploader, log)
    }

    #[test]
    fn starts_idle() {
        let (uploader, _) = recording(UploaderConfig::default());
        assert_eq!(uploader.state(), DragState::Idle);
        assert_eq!(uploader.active_class(), "");
    }

    #[test]
    fn enter_then_leave_restores_idle() {
        let (mut uploader, log) = recording(UploaderConfig::default());
        uploader.drag_enter();
        assert!(uploader.is_active());
        assert_eq!(uploader.active_class(), "is-active");
        uploader.drag_leave();
        assert!(!uploader.is_active());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn drag_end_resets_state() {
        let (mut uploader, _) = recording(UploaderConfig::default());
        uploader.drag_enter();
        uploader.drag_end();
        assert_eq!(uploader.state(), DragState::Idle);
    }

    #[test]
    fn drop_delivers_first_file_once() {
        let (mut uploader, log) = recording(UploaderConfig::default());
        uploader.drag_enter();
        let delivered = uploader
            .drop_files(vec!["photo.png".to_owned(), "other.png".to_owned()])
            .unwrap();
        assert!(delivered);
        assert!(!uploader.is_active());
        assert_eq!(
            *log.borrow(),
            vec![("photo.png".to_owned(), "photo.png".to_owned())]
        );
    }

    #[test]
    fn empty_drop_is_ignored_by_default() {
        let (mut uploader, log) = recording(UploaderConfig::default());
        uploader.drag_enter();
        assert_eq!(uploader.drop_files(Vec::new()), Ok(false));
        assert!(!uploader.is_active());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn empty_drop_can_be_rejected() {
        let (mut uploader, log) = recording(UploaderConfig {
            empty_drop: EmptyDropPolicy::Reject,
            ..UploaderConfig::default()
        });
        uploader.drag_enter();
        assert_eq!(uploader.drop_files(Vec::new()), Err(UploadError::EmptyPayload));
        assert!(!uploader.is_active(), "state must reset even on error");
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn unsupported_type_is_not_delivered() {
        let (mut uploader, log) = recording(UploaderConfig::images());
        let err = uploader.drop_files(vec!["notes.txt".to_owned()]).unwrap_err();
        assert_eq!(err, UploadError::UnsupportedType("notes.txt".into()));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn manual_select_uses_last_path_segment() {
        let (mut uploader, log) = recording(UploaderConfig::default());
        let handle = "blob-1".to_owned();
        assert_eq!(
            uploader.manual_select(vec![handle], r"C:\Users\me\cat.jpg"),
            Ok(true)
        );
        assert_eq!(
            *log.borrow(),
            vec![("blob-1".to_owned(), "cat.jpg".to_owned())]
        );
        assert_eq!(uploader.state(), DragState::Idle);
    }

    #[test]
    fn manual_select_without_input_value_uses_file_name() {
        let (mut uploader, log) = recording(UploaderConfig::default());
        uploader
            .manual_select(vec!["/tmp/dog.gif".to_owned()], "")
            .unwrap();
        assert_eq!(log.borrow()[0].1, "dog.gif");
    }

    #[test]
    fn dismissed_picker_is_not_an_error() {
        let (mut uploader, log) = recording(UploaderConfig {
            empty_drop: EmptyDropPolicy::Reject,
            ..UploaderConfig::default()
        });
        assert_eq!(uploader.manual_select(Vec::new(), ""), Ok(false));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn repeated_drag_over_notifies_once() {
        let (mut uploader, _) = recording(UploaderConfig::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        uploader.subscribe(move |state| sink.borrow_mut().push(state));

        uploader.drag_enter();
        uploader.drag_over();
        uploader.drag_over();
        uploader.drop_files(vec!["a.png".to_owned()]).unwrap();

        assert_eq!(*seen.borrow(), vec![DragState::DragOver, DragState::Idle]);
    }

    #[test]
    fn unsubscribed_listener_is_silent() {
        let (mut uploader, _) = recording(UploaderConfig::default());
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let sub = uploader.subscribe(move |_| *sink.borrow_mut() += 1);

        uploader.drag_enter();
        assert!(uploader.unsubscribe(sub));
        assert!(!uploader.unsubscribe(sub));
        uploader.drag_leave();

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn crossing_onto_a_child_keeps_drag_over() {
        let (mut uploader, log) = recording(UploaderConfig::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        uploader.subscribe(move |state| sink.borrow_mut().push(state));

        // Enter the zone, enter a child (bubbled), leave the zone itself.
        uploader.drag_enter();
        uploader.drag_enter();
        uploader.drag_leave();
        assert!(uploader.is_active());
        uploader.drag_over();
        uploader.drop_files(vec!["photo.png".to_owned()]).unwrap();

        assert_eq!(*seen.borrow(), vec![DragState::DragOver, DragState::Idle]);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn leaving_child_then_zone_returns_idle() {
        let (mut uploader, _) = recording(UploaderConfig::default());
        uploader.drag_enter();
        uploader.drag_enter();
        uploader.drag_leave();
        uploader.drag_leave();
        assert_eq!(uploader.state(), DragState::Idle);
    }

    #[test]
    fn drag_over_without_enter_activates_and_one_leave_clears() {
        let (mut uploader, _) = recording(UploaderConfig::default());
        uploader.drag_over();
        uploader.drag_over();
        assert!(uploader.is_active());
        uploader.drag_leave();
        assert!(!uploader.is_active());
    }

    #[test]
    fn drop_resets_depth_for_the_next_gesture() {
        let (mut uploader, _) = recording(UploaderConfig::default());
        uploader.drag_enter();
        uploader.drag_enter();
        uploader.drop_files(vec!["a.png".to_owned()]).unwrap();
        uploader.drag_enter();
        uploader.drag_leave();
        assert_eq!(uploader.state(), DragState::Idle);
    }

    #[test]
    fn leave_while_idle_does_not_notify() {
        let (mut uploader, _) = recording(UploaderConfig::default());
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        uploader.subscribe(move |_| *sink.borrow_mut() += 1);
        uploader.drag_leave();
        uploader.drag_end();
        assert_eq!(*count.borrow(), 0);
    }
}
