//! Files chosen for the batch upload, either from the picker or by drag-and-drop.

/// Anything with a display name. Implemented for browser files and for test doubles.
pub trait FileHandle {
    fn file_name(&self) -> String;
}

impl FileHandle for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}

/// Collect a browser `FileList` in selection order
pub fn files_from_list(list: Option<web_sys::FileList>) -> Vec<web_sys::File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// The native file input. A drop must land in it as well, or re-picking the
/// files it still holds fires no `change` and the dropped set gets sent.
pub trait FilePicker {
    type List;
    type File;

    fn replace_list(&self, list: Option<&Self::List>);
    fn list_files(list: Option<&Self::List>) -> Vec<Self::File>;
}

impl FilePicker for web_sys::HtmlInputElement {
    type List = web_sys::FileList;
    type File = web_sys::File;

    fn replace_list(&self, list: Option<&web_sys::FileList>) {
        self.set_files(list);
    }

    fn list_files(list: Option<&web_sys::FileList>) -> Vec<web_sys::File> {
        files_from_list(list.cloned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelection<F> {
    files: Vec<F>,
    drop_active: bool,
}

impl<F> Default for FileSelection<F> {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            drop_active: false,
        }
    }
}

impl<F: FileHandle> FileSelection<F> {
    /// Picker change: the new list replaces the old one
    pub fn choose(&mut self, files: Vec<F>) {
        self.files = files;
    }

    pub fn drag_over(&mut self) {
        self.drop_active = true;
    }

    pub fn drag_leave(&mut self) {
        self.drop_active = false;
    }

    /// Dropped files replace any prior selection
    pub fn drop_files(&mut self, files: Vec<F>) {
        self.drop_active = false;
        self.files = files;
    }

    /// Drop that also becomes the picker's own selection
    pub fn drop_into<P: FilePicker<File = F>>(&mut self, picker: &P, list: Option<P::List>) {
        picker.replace_list(list.as_ref());
        self.drop_files(P::list_files(list.as_ref()));
    }

    pub fn files(&self) -> &[F] {
        &self.files
    }

    pub fn is_drop_active(&self) -> bool {
        self.drop_active
    }

    pub fn names(&self) -> Vec<String> {
        self.files.iter().map(FileHandle::file_name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    struct Named(&'static str);

    impl FileHandle for Named {
        fn file_name(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_drop_replaces_selection_and_clears_mark() {
        let mut selection = FileSelection::default();
        selection.choose(vec![Named("antiga.pdf")]);

        selection.drag_over();
        assert!(selection.is_drop_active());

        selection.drop_files(vec![Named("a.pdf"), Named("b.xml")]);
        assert!(!selection.is_drop_active());
        assert_eq!(selection.names(), vec!["a.pdf", "b.xml"]);
    }

    #[test]
    fn test_drag_leave_clears_mark_without_touching_files() {
        let mut selection = FileSelection::default();
        selection.choose(vec![Named("a.pdf")]);
        selection.drag_over();
        selection.drag_leave();
        assert!(!selection.is_drop_active());
        assert_eq!(selection.files(), &[Named("a.pdf")]);
    }

    #[test]
    fn test_empty_drop_empties_selection() {
        let mut selection = FileSelection::default();
        selection.choose(vec![Named("a.pdf")]);
        selection.drop_files(Vec::new());
        assert!(selection.files().is_empty());
    }

    #[derive(Default)]
    struct FakePicker {
        shown: RefCell<Vec<Named>>,
    }

    impl FakePicker {
        /// What the browser does on a `change`: the picker holds the chosen list
        fn pick(&self, selection: &mut FileSelection<Named>, files: Vec<Named>) {
            if *self.shown.borrow() == files {
                return;
            }
            *self.shown.borrow_mut() = files.clone();
            selection.choose(files);
        }
    }

    impl FilePicker for FakePicker {
        type List = Vec<Named>;
        type File = Named;

        fn replace_list(&self, list: Option<&Vec<Named>>) {
            *self.shown.borrow_mut() = list.cloned().unwrap_or_default();
        }

        fn list_files(list: Option<&Vec<Named>>) -> Vec<Named> {
            list.cloned().unwrap_or_default()
        }
    }

    #[test]
    fn test_repick_after_drop_restores_the_picked_files() {
        let picker = FakePicker::default();
        let mut selection = FileSelection::default();

        picker.pick(&mut selection, vec![Named("a.pdf")]);
        selection.drag_over();
        selection.drop_into(&picker, Some(vec![Named("b.xml")]));
        assert!(!selection.is_drop_active());
        assert_eq!(*picker.shown.borrow(), vec![Named("b.xml")]);
        assert_eq!(selection.names(), vec!["b.xml"]);

        picker.pick(&mut selection, vec![Named("a.pdf")]);
        assert_eq!(selection.names(), vec!["a.pdf"]);
    }

    #[test]
    fn test_drop_without_list_empties_picker_and_selection() {
        let picker = FakePicker::default();
        let mut selection = FileSelection::default();
        picker.pick(&mut selection, vec![Named("a.pdf")]);

        selection.drop_into(&picker, None);
        assert!(picker.shown.borrow().is_empty());
        assert!(selection.files().is_empty());
    }
}
