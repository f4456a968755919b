use std::rc::Rc;

use yew::Reducible;

use super::error::GenerationError;
use super::models::{GenerateVideoRequest, GeneratedVideo, VideoDuration};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Generating,
    Succeeded(GeneratedVideo),
    Failed(GenerationError),
}

/// Form and result state of the generator. Video, error and the in-flight
/// flag are variants of one `status`, so at most one of them is ever set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeneratorState {
    pub question: String,
    pub duration: VideoDuration,
    pub status: GenerationStatus,
}

pub enum GeneratorAction {
    SetQuestion(String),
    SetDuration(VideoDuration),
    Start,
    Reject(GenerationError),
    Finish(Result<GeneratedVideo, GenerationError>),
    Reset,
}

/// What a click on the submit button should do.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Send(GenerateVideoRequest),
    Reject(GenerationError),
    Busy,
}

impl GeneratorState {
    pub fn is_generating(&self) -> bool {
        matches!(self.status, GenerationStatus::Generating)
    }

    pub fn can_submit(&self) -> bool {
        !self.is_generating() && !self.question.trim().is_empty()
    }

    pub fn video(&self) -> Option<&GeneratedVideo> {
        match &self.status {
            GenerationStatus::Succeeded(video) => Some(video),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&GenerationError> {
        match &self.status {
            GenerationStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn submission(&self) -> Submission {
        if self.is_generating() {
            return Submission::Busy;
        }
        if self.question.trim().is_empty() {
            return Submission::Reject(GenerationError::EmptyQuestion);
        }
        Submission::Send(GenerateVideoRequest {
            question: self.question.clone(),
            duration: self.duration.seconds(),
        })
    }
}

impl Reducible for GeneratorState {
    type Action = GeneratorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let generating = self.is_generating();
        let next = match action {
            // inputs are frozen while a request is in flight
            GeneratorAction::SetQuestion(_) | GeneratorAction::SetDuration(_) if generating => {
                return self
            }
            GeneratorAction::SetQuestion(question) => GeneratorState {
                question,
                ..(*self).clone()
            },
            GeneratorAction::SetDuration(duration) => GeneratorState {
                duration,
                ..(*self).clone()
            },
            GeneratorAction::Start | GeneratorAction::Reject(_) if generating => return self,
            GeneratorAction::Start => GeneratorState {
                status: GenerationStatus::Generating,
                ..(*self).clone()
            },
            GeneratorAction::Reject(err) => GeneratorState {
                status: GenerationStatus::Failed(err),
                ..(*self).clone()
            },
            GeneratorAction::Finish(_) if !generating => return self,
            GeneratorAction::Finish(outcome) => GeneratorState {
                status: match outcome {
                    Ok(video) => GenerationStatus::Succeeded(video),
                    Err(err) => GenerationStatus::Failed(err),
                },
                ..(*self).clone()
            },
            GeneratorAction::Reset if generating => return self,
            GeneratorAction::Reset => GeneratorState {
                question: String::new(),
                duration: self.duration,
                status: GenerationStatus::Idle,
            },
        };
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(question: &str) -> Rc<GeneratorState> {
        Rc::new(GeneratorState::default()).reduce(GeneratorAction::SetQuestion(question.to_string()))
    }

    fn video() -> GeneratedVideo {
        GeneratedVideo {
            url: "http://localhost:8000/videos/abc.mp4".to_string(),
            scene_id: Some("abc".to_string()),
        }
    }

    #[test]
    fn blank_question_is_rejected_without_a_request() {
        for question in ["", "   ", "\n\t "] {
            let state = state_with(question);
            assert_eq!(
                state.submission(),
                Submission::Reject(GenerationError::EmptyQuestion)
            );
            assert!(!state.can_submit());

            let state = state.reduce(GeneratorAction::Reject(GenerationError::EmptyQuestion));
            assert_eq!(state.error().map(|e| e.to_string()).as_deref(), Some("Please enter a question"));
            assert!(!state.is_generating());
        }
    }

    #[test]
    fn submission_carries_question_verbatim_with_each_duration() {
        for duration in VideoDuration::ALL {
            let state = state_with(" Why is the sky blue? ").reduce(GeneratorAction::SetDuration(duration));
            match state.submission() {
                Submission::Send(request) => {
                    assert_eq!(
                        serde_json::to_value(&request).unwrap(),
                        serde_json::json!({
                            "question": " Why is the sky blue? ",
                            "duration": duration.seconds(),
                        })
                    );
                }
                other => panic!("expected a request, got {:?}", other),
            }
        }
    }

    #[test]
    fn start_clears_previous_error_and_video() {
        let failed = state_with("q")
            .reduce(GeneratorAction::Start)
            .reduce(GeneratorAction::Finish(Err(GenerationError::MalformedResponse)));
        assert!(failed.error().is_some());

        let restarted = failed.reduce(GeneratorAction::Start);
        assert!(restarted.is_generating());
        assert!(restarted.error().is_none());
        assert!(restarted.video().is_none());
    }

    #[test]
    fn every_outcome_leaves_generating() {
        let outcomes = [
            Ok(video()),
            Err(GenerationError::service(Some("quota exceeded".to_string()))),
            Err(GenerationError::transport("TypeError: Failed to fetch")),
        ];
        for outcome in outcomes {
            let state = state_with("q")
                .reduce(GeneratorAction::Start)
                .reduce(GeneratorAction::Finish(outcome));
            assert!(!state.is_generating());
        }
    }

    #[test]
    fn failure_shows_service_detail() {
        let state = state_with("q")
            .reduce(GeneratorAction::Start)
            .reduce(GeneratorAction::Finish(Err(GenerationError::service(Some(
                "quota exceeded".to_string(),
            )))));
        assert_eq!(state.error().unwrap().to_string(), "quota exceeded");
        assert!(state.video().is_none());
    }

    #[test]
    fn second_submit_while_generating_is_ignored() {
        let state = state_with("q").reduce(GeneratorAction::Start);
        assert_eq!(state.submission(), Submission::Busy);
        assert!(!state.can_submit());

        let again = state.clone().reduce(GeneratorAction::Start);
        assert!(Rc::ptr_eq(&state, &again));
        let edited = state.clone().reduce(GeneratorAction::SetQuestion("other".to_string()));
        assert_eq!(edited.question, "q");
    }

    #[test]
    fn late_completion_is_ignored() {
        let state = state_with("q");
        let next = state.clone().reduce(GeneratorAction::Finish(Ok(video())));
        assert_eq!(next.status, GenerationStatus::Idle);
    }

    #[test]
    fn empty_submit_after_success_replaces_video_with_error() {
        let state = state_with("q")
            .reduce(GeneratorAction::Start)
            .reduce(GeneratorAction::Finish(Ok(video())))
            .reduce(GeneratorAction::SetQuestion("  ".to_string()));
        assert!(state.video().is_some());

        let err = match state.submission() {
            Submission::Reject(err) => err,
            other => panic!("expected a rejection, got {:?}", other),
        };
        let state = state.reduce(GeneratorAction::Reject(err));
        assert!(state.video().is_none());
        assert_eq!(state.error(), Some(&GenerationError::EmptyQuestion));
        assert!(!state.is_generating());
    }

    #[test]
    fn reset_after_success_returns_to_empty_form() {
        let state = state_with("What is a derivative?")
            .reduce(GeneratorAction::SetDuration(VideoDuration::TwoMinutes))
            .reduce(GeneratorAction::Start)
            .reduce(GeneratorAction::Finish(Ok(video())));
        assert_eq!(state.video(), Some(&video()));

        let reset = state.reduce(GeneratorAction::Reset);
        assert_eq!(reset.status, GenerationStatus::Idle);
        assert!(reset.question.is_empty());
        assert!(reset.video().is_none());
        assert_eq!(reset.duration, VideoDuration::TwoMinutes);
    }
}
