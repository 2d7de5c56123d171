use common::model::field::FieldName;
use common::model::photo::Photo;
use common::model::registration::RegistrationReceipt;

pub enum Msg {
    /// An `<input>`/`<select>` changed; `name` is its `name` attribute.
    InputChanged { name: String, value: String },
    Focus(Option<FieldName>),
    OpenFileDialog,
    /// `None` when the file dialog was dismissed without a choice.
    FileSelected(Option<web_sys::File>),
    /// Read finished for pick number `selection`.
    PhotoLoaded { selection: u32, photo: Photo },
    PhotoReadFailed { selection: u32, reason: String },
    Submit,
    SubmissionFinished(Result<RegistrationReceipt, String>),
}
