//! PDF-or-images choice on the upload form.
//!
//! Each upload category (assignment, mark scheme) has two radio buttons, two
//! upload containers and two file inputs. Only the chosen side is shown and
//! required, and the other input is emptied so a submission never carries a
//! PDF and an image set for the same category.

/// Element ids of one field group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldGroupIds {
    pub pdf_radio: String,
    pub images_radio: String,
    pub pdf_container: String,
    pub images_container: String,
    pub pdf_input: String,
    pub images_input: String,
}

impl FieldGroupIds {
    /// Ids following the upload form's `{prefix}_type_pdf` naming.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            pdf_radio: format!("{prefix}_type_pdf"),
            images_radio: format!("{prefix}_type_images"),
            pdf_container: format!("{prefix}_pdf_upload"),
            images_container: format!("{prefix}_images_upload"),
            pdf_input: format!("{prefix}_pdf"),
            images_input: format!("{prefix}_images"),
        }
    }

    pub fn assignment() -> Self {
        Self::with_prefix("assignment")
    }

    pub fn mark_scheme() -> Self {
        Self::with_prefix("mark_scheme")
    }
}

/// Presentation of one container and its file input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldState {
    pub visible: bool,
    pub required: bool,
    /// Drop the input's selected files.
    pub clear: bool,
}

impl FieldState {
    /// CSS `display` value for the container.
    pub fn display(&self) -> &'static str {
        if self.visible { "block" } else { "none" }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldGroupLayout {
    pub pdf: FieldState,
    pub images: FieldState,
}

impl FieldGroupLayout {
    /// Layout for the current radio state. Each side follows its own radio;
    /// the images input is cleared when PDF is chosen, otherwise the PDF input.
    pub fn from_selection(pdf_checked: bool, images_checked: bool) -> Self {
        Self {
            pdf: FieldState {
                visible: pdf_checked,
                required: pdf_checked,
                clear: !pdf_checked,
            },
            images: FieldState {
                visible: images_checked,
                required: images_checked,
                clear: pdf_checked,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_selected() {
        let layout = FieldGroupLayout::from_selection(true, false);
        assert_eq!(
            layout.pdf,
            FieldState {
                visible: true,
                required: true,
                clear: false,
            }
        );
        assert_eq!(
            layout.images,
            FieldState {
                visible: false,
                required: false,
                clear: true,
            }
        );
        assert_eq!(layout.pdf.display(), "block");
        assert_eq!(layout.images.display(), "none");
    }

    #[test]
    fn images_selected_is_symmetric() {
        let layout = FieldGroupLayout::from_selection(false, true);
        assert_eq!(
            layout.pdf,
            FieldState {
                visible: false,
                required: false,
                clear: true,
            }
        );
        assert_eq!(
            layout.images,
            FieldState {
                visible: true,
                required: true,
                clear: false,
            }
        );
    }

    #[test]
    fn nothing_selected_hides_both() {
        let layout = FieldGroupLayout::from_selection(false, false);
        assert!(!layout.pdf.visible && !layout.images.visible);
        assert!(!layout.pdf.required && !layout.images.required);
        assert!(layout.pdf.clear);
        assert!(!layout.images.clear);
    }

    #[test]
    fn upload_form_ids() {
        let ids = FieldGroupIds::mark_scheme();
        assert_eq!(ids.pdf_radio, "mark_scheme_type_pdf");
        assert_eq!(ids.images_radio, "mark_scheme_type_images");
        assert_eq!(ids.pdf_container, "mark_scheme_pdf_upload");
        assert_eq!(ids.images_container, "mark_scheme_images_upload");
        assert_eq!(ids.pdf_input, "mark_scheme_pdf");
        assert_eq!(ids.images_input, "mark_scheme_images");
    }
}
