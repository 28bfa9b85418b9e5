pub mod message;
mod view;

use std::sync::Arc;

use iced::{
    event, mouse, touch,
    widget::container,
    Event, Subscription, Task,
};
use tracing::{debug, info, warn};

use phonegate::{
    country::{CountryDirectory, Flag},
    form::PhoneForm,
    selector::CountrySelector,
    submission::SubmissionAdapter,
};
use phonegate_ui::{image::FlagImages, widget::Element};

use crate::{
    config::Config,
    services::{auth::AuthClient, countries::CountryClient, flags, twofa::TwoFactorClient},
};
pub use message::{Message, PointerEvent};

/// Identifies the picker region, dropdown included, for outside-press detection.
pub const PICKER_ID: &str = "country-picker";

/// An error banner. Cleared by the user only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DirectoryState {
    Loading,
    Loaded,
    Failed,
}

pub struct App {
    config: Config,
    http: reqwest::Client,
    form: PhoneForm,
    selector: CountrySelector,
    directory: CountryDirectory,
    directory_state: DirectoryState,
    adapter: Option<Arc<dyn SubmissionAdapter>>,
    flags: FlagImages,
    notice: Option<Notice>,
}

impl App {
    pub fn new(config: Config) -> (App, Task<Message>) {
        let http = reqwest::Client::new();
        let auth = AuthClient::new(
            http.clone(),
            &config.auth_url,
            config.client_id.clone(),
            config.client_secret.clone(),
        );
        let app = App {
            form: PhoneForm::new(config.form_policy()),
            selector: CountrySelector::new(config.selector_policy()),
            config,
            http,
            directory: CountryDirectory::new(),
            directory_state: DirectoryState::Loading,
            adapter: None,
            flags: FlagImages::default(),
            notice: None,
        };
        (
            app,
            Task::perform(async move { auth.access_token().await }, |res| {
                Message::AccessToken(res.map_err(|e| e.to_string()))
            }),
        )
    }

    pub fn title(&self) -> String {
        format!("Phonegate v{}", crate::VERSION)
    }

    pub fn form(&self) -> &PhoneForm {
        &self.form
    }

    pub fn selector(&self) -> &CountrySelector {
        &self.selector
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AccessToken(Ok(token)) => {
                info!("Access token obtained");
                self.adapter = Some(Arc::new(TwoFactorClient::new(
                    self.http.clone(),
                    &self.config.api_url,
                    token.access_token.clone(),
                )));
                let client = CountryClient::new(self.http.clone(), &self.config.api_url);
                return Task::perform(
                    async move { client.fetch(&token.access_token).await },
                    |res| Message::Directory(res.map_err(|e| e.to_string())),
                );
            }
            Message::AccessToken(Err(e)) => {
                warn!("Failed to obtain access token: {}", e);
                self.directory_state = DirectoryState::Failed;
                self.notice = Some(Notice {
                    title: "Unable to authenticate",
                    message: e,
                });
            }
            Message::Directory(Ok(directory)) => {
                info!("Country directory loaded with {} entries", directory.len());
                self.directory = directory;
                self.directory_state = DirectoryState::Loaded;
                if let Some(selection) = self.form.directory_loaded(&self.directory) {
                    debug!("Default country: {}", selection);
                }
                return self.fetch_flags();
            }
            Message::Directory(Err(e)) => {
                warn!("Failed to load country directory: {}", e);
                self.directory_state = DirectoryState::Failed;
                self.notice = Some(Notice {
                    title: "Unable to load countries",
                    message: e,
                });
            }
            Message::FlagLoaded(flag, res) => match res {
                Ok(bytes) => self.flags.insert(flag, bytes),
                Err(e) => debug!("No flag for {}: {}", flag.code(), e),
            },
            Message::ToggleCountryPicker => self.selector.toggle(),
            Message::SearchCountry(term) => self.selector.set_search(term),
            Message::SelectCountry(region_code) => {
                if let Some(selection) = self.selector.choose(&self.directory, &region_code) {
                    self.form.select_country(selection);
                }
            }
            Message::Pointer(PointerEvent::Moved(position)) => {
                self.selector.cursor_moved(position);
            }
            Message::Pointer(PointerEvent::Touched(position)) => {
                self.selector.cursor_moved(position);
                return self.resolve_pointer_down();
            }
            Message::Pointer(PointerEvent::Pressed) => {
                return self.resolve_pointer_down();
            }
            Message::PointerDown { position, bounds } => {
                if self.selector.pointer_down(position, bounds) {
                    debug!("Country picker closed by an outside press");
                }
            }
            Message::PhoneEdited(text) => {
                self.form.edit_phone(&text);
            }
            Message::Submit => {
                if self.form.is_submitting() {
                    return Task::none();
                }
                let Some(adapter) = self.adapter.clone() else {
                    warn!("Submit requested without credentials");
                    return Task::none();
                };
                if let Some(request) = self.form.begin_submit() {
                    return Task::perform(
                        async move {
                            let res = adapter
                                .submit(&request.phone_digits, &request.country_id)
                                .await;
                            (request, res)
                        },
                        |(request, res)| Message::Submitted(request, res),
                    );
                }
            }
            Message::Submitted(request, res) => {
                if !self.form.submission_finished(&request, &res) {
                    debug!("Dropped the answer of an abandoned submission");
                }
            }
            Message::DismissError => self.notice = None,
        }
        Task::none()
    }

    /// Hit-tests a press against the rendered picker region.
    fn resolve_pointer_down(&self) -> Task<Message> {
        // Without a position the pointer has not moved since the press that
        // opened the picker, so it is still over the toggle.
        let Some(position) = self.selector.cursor() else {
            return Task::none();
        };
        if !self.selector.is_open() {
            return Task::none();
        }
        container::visible_bounds(container::Id::new(PICKER_ID))
            .map(move |bounds| Message::PointerDown { position, bounds })
    }

    fn fetch_flags(&self) -> Task<Message> {
        Task::batch(
            self.directory
                .iter()
                .map(|(code, _)| Flag::new(code))
                .filter(|flag| !self.flags.contains(flag))
                .map(|flag| {
                    Task::perform(flags::fetch_flag(self.http.clone(), flag), |(flag, res)| {
                        Message::FlagLoaded(flag, res)
                    })
                }),
        )
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.selector.listens_for_pointer() {
            event::listen_with(pointer_event)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<Message> {
        view::phone_view(view::PhoneView {
            form: &self.form,
            selector: &self.selector,
            directory: &self.directory,
            loading: self.directory_state == DirectoryState::Loading,
            flags: &self.flags,
            notice: self.notice.as_ref(),
        })
    }
}

fn pointer_event(event: Event, _status: event::Status, _window: iced::window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::Pointer(PointerEvent::Moved(position)))
        }
        Event::Mouse(mouse::Event::ButtonPressed(_)) => Some(Message::Pointer(PointerEvent::Pressed)),
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::Pointer(PointerEvent::Touched(position)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Point, Rectangle, Size};
    use phonegate::{
        form::SubmissionStatus,
        submission::{SubmissionError, SubmissionOutcome, SubmissionRequest},
    };

    use crate::services::auth::AccessToken;

    fn directory() -> CountryDirectory {
        serde_json::from_str(
            r#"{
                "US": {"id": "c-us", "name": "United States", "callingCode": "+1", "expectedDigitLength": 10},
                "FR": {"id": "c-fr", "name": "France", "callingCode": "+33", "expectedDigitLength": 9}
            }"#,
        )
        .unwrap()
    }

    fn token() -> AccessToken {
        AccessToken {
            access_token: "tok-123".to_string(),
            token_type: Some("Bearer".to_string()),
            expires_in: Some(3600),
        }
    }

    fn us_request() -> SubmissionRequest {
        SubmissionRequest {
            phone_digits: "4155550123".to_string(),
            country_id: "c-us".to_string(),
        }
    }

    fn loaded_app() -> App {
        let (mut app, _) = App::new(Config::default());
        let _ = app.update(Message::AccessToken(Ok(token())));
        let _ = app.update(Message::Directory(Ok(directory())));
        app
    }

    #[test]
    fn test_directory_selects_first_country() {
        let app = loaded_app();
        assert_eq!(app.form().selection().unwrap().region_code, "US");
        assert_eq!(app.form().placeholder(), "(000) 000-0000");
        assert!(app.notice().is_none());
    }

    #[test]
    fn test_directory_failure_shows_notice() {
        let (mut app, _) = App::new(Config::default());
        let _ = app.update(Message::Directory(Err("503: unavailable".to_string())));
        assert_eq!(
            app.notice(),
            Some(&Notice {
                title: "Unable to load countries",
                message: "503: unavailable".to_string(),
            })
        );
        assert!(app.form().selection().is_none());
        let _ = app.update(Message::DismissError);
        assert!(app.notice().is_none());
    }

    #[test]
    fn test_token_failure_shows_notice() {
        let (mut app, _) = App::new(Config::default());
        let _ = app.update(Message::AccessToken(Err("401: invalid client".to_string())));
        assert_eq!(app.notice().unwrap().title, "Unable to authenticate");
        assert_eq!(app.directory_state, DirectoryState::Failed);
    }

    #[test]
    fn test_select_country_closes_picker() {
        let mut app = loaded_app();
        let _ = app.update(Message::ToggleCountryPicker);
        assert!(app.selector().is_open());
        let _ = app.update(Message::SearchCountry("fra".to_string()));
        let _ = app.update(Message::SelectCountry("FR".to_string()));
        assert!(!app.selector().is_open());
        assert_eq!(app.form().selection().unwrap().id(), "c-fr");
    }

    #[test]
    fn test_outside_press_closes_picker() {
        let mut app = loaded_app();
        let _ = app.update(Message::ToggleCountryPicker);
        let bounds = Rectangle::new(Point::new(0.0, 0.0), Size::new(200.0, 300.0));

        let _ = app.update(Message::Pointer(PointerEvent::Moved(Point::new(50.0, 50.0))));
        let _ = app.update(Message::PointerDown {
            position: Point::new(50.0, 50.0),
            bounds: Some(bounds),
        });
        assert!(app.selector().is_open());

        let _ = app.update(Message::PointerDown {
            position: Point::new(400.0, 50.0),
            bounds: Some(bounds),
        });
        assert!(!app.selector().is_open());
    }

    #[test]
    fn test_press_before_any_move_stays_open() {
        let mut app = loaded_app();
        let _ = app.update(Message::ToggleCountryPicker);
        assert!(app.selector().cursor().is_none());

        // The pointer is still over the toggle that opened the picker.
        let _ = app.update(Message::Pointer(PointerEvent::Pressed));
        assert!(app.selector().is_open());

        // Once the position is known, a press waits for the picker bounds.
        let _ = app.update(Message::Pointer(PointerEvent::Moved(Point::new(400.0, 50.0))));
        let _ = app.update(Message::Pointer(PointerEvent::Pressed));
        assert!(app.selector().is_open());
        assert_eq!(app.selector().cursor(), Some(Point::new(400.0, 50.0)));
    }

    #[test]
    fn test_touch_outside_closes_picker() {
        let mut app = loaded_app();
        let _ = app.update(Message::ToggleCountryPicker);
        let _ = app.update(Message::Pointer(PointerEvent::Touched(Point::new(400.0, 50.0))));
        assert_eq!(app.selector().cursor(), Some(Point::new(400.0, 50.0)));
        let _ = app.update(Message::PointerDown {
            position: Point::new(400.0, 50.0),
            bounds: None,
        });
        assert!(!app.selector().is_open());
    }

    #[test]
    fn test_answer_for_previous_country_is_ignored() {
        let mut app = loaded_app();
        let _ = app.update(Message::PhoneEdited("4155550123".to_string()));
        let _ = app.update(Message::Submit);
        let _ = app.update(Message::SelectCountry("FR".to_string()));
        assert!(!app.form().is_submitting());

        let _ = app.update(Message::Submitted(us_request(), Ok(SubmissionOutcome::Accepted)));
        assert_eq!(app.form().submission(), &SubmissionStatus::Idle);
        assert_eq!(app.form().selection().unwrap().id(), "c-fr");
    }

    #[test]
    fn test_submit_flow() {
        let mut app = loaded_app();
        let _ = app.update(Message::PhoneEdited("415555".to_string()));
        assert!(!app.form().is_submit_eligible());
        assert!(app.form().validation_error().is_some());

        let _ = app.update(Message::PhoneEdited("4155550123".to_string()));
        assert!(app.form().is_submit_eligible());
        let _ = app.update(Message::Submit);
        assert!(app.form().is_submitting());

        let _ = app.update(Message::Submitted(us_request(), Ok(SubmissionOutcome::Accepted)));
        assert_eq!(app.form().submission(), &SubmissionStatus::Succeeded);
    }

    #[test]
    fn test_submit_failure_is_displayed() {
        let mut app = loaded_app();
        let _ = app.update(Message::PhoneEdited("4155550123".to_string()));
        let _ = app.update(Message::Submit);
        let _ = app.update(Message::Submitted(
            us_request(),
            Err(SubmissionError {
                http_status: Some(429),
                message: "Too many attempts".to_string(),
            }),
        ));
        assert_eq!(
            app.form().submission(),
            &SubmissionStatus::Failed("Too many attempts".to_string())
        );
    }

    #[test]
    fn test_submit_without_credentials() {
        let (mut app, _) = App::new(Config::default());
        let _ = app.update(Message::Directory(Ok(directory())));
        let _ = app.update(Message::PhoneEdited("4155550123".to_string()));
        let _ = app.update(Message::Submit);
        assert!(!app.form().is_submitting());
    }
}
