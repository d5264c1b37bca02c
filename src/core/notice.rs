use std::time::Duration;

pub const NOTICE_VISIBLE_FOR: Duration = Duration::from_millis(5000);
pub const NOTICE_FADE_FOR: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticePhase {
    FadingOut,
    Removed,
}

/// Phase changes after the notice is appended, as offsets from the append.
pub fn notice_schedule() -> [(Duration, NoticePhase); 2] {
    [
        (NOTICE_VISIBLE_FOR, NoticePhase::FadingOut),
        (NOTICE_VISIBLE_FOR + NOTICE_FADE_FOR, NoticePhase::Removed),
    ]
}

/// One step of handling a contact-form submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStep {
    /// Cancel the browser's navigation.
    SuppressNavigation,
    LogFields,
    /// Append a single notice and schedule its phases.
    AppendNotice,
    ResetForm,
}

/// Ordered steps for every submit. Nothing is transmitted.
pub const SUBMIT_STEPS: [SubmitStep; 4] = [
    SubmitStep::SuppressNavigation,
    SubmitStep::LogFields,
    SubmitStep::AppendNotice,
    SubmitStep::ResetForm,
];
