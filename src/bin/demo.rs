// SPDX-License-Identifier: GPL-3.0-only

//! Softpad Demo Application
//!
//! Hosts both widgets around a scratch buffer: the on-screen keyboard types
//! into the buffer through an [`EditorHandle`], and a row of buttons raises
//! toasts of every category. This is the reference wiring for embedding the
//! widgets in a real editor application.
//!
//! ```bash
//! cargo run --bin softpad-demo
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use cosmic::iced::widget::stack;
use cosmic::iced::{event, mouse, time, Alignment, Event, Length, Subscription};
use cosmic::prelude::*;
use cosmic::widget::{self, button, container};

use softpad::app_settings::{self, TOAST_TIMER_INTERVAL_MS};
use softpad::editor::EditorHandle;
use softpad::fl;
use softpad::keyboard::{render_positioned, KeyboardMessage, VirtualKeyboard};
use softpad::toast::{render_stack, Category, ToastMessage, ToastOptions, Toaster};

fn main() -> cosmic::iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("softpad=debug".parse().unwrap()),
        )
        .init();

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    softpad::i18n::init(&requested_languages);

    let settings = cosmic::app::Settings::default()
        .size(cosmic::iced::Size::new(1100.0, 700.0));

    cosmic::app::run::<DemoModel>(settings, ())
}

/// The scratch buffer shared between the demo view and the editor handle.
type SharedBuffer = Arc<Mutex<String>>;

/// Editor handle backed by the shared scratch buffer.
struct BufferHandle {
    buffer: SharedBuffer,
}

impl EditorHandle for BufferHandle {
    fn insert_text(&mut self, text: &str) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push_str(text);
        }
    }

    fn delete_left(&mut self) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.pop();
        }
    }

    fn focus(&mut self) {
        // The scratch buffer has no focus concept; a real editor would
        // forward this to its focus manager.
    }
}

/// The demo application model.
struct DemoModel {
    core: cosmic::Core,
    buffer: SharedBuffer,
    keyboard: VirtualKeyboard,
    toaster: Toaster,
}

/// Messages emitted by the demo and its widgets.
#[derive(Debug, Clone)]
enum Message {
    /// A keyboard panel message.
    Keyboard(KeyboardMessage),
    /// A toast stack message.
    Toast(ToastMessage),
    /// Re-open the keyboard (after closing it).
    OpenKeyboard,
    /// Raise a toast of the given category.
    Notify(Category),
}

impl cosmic::Application for DemoModel {
    type Executor = cosmic::executor::Default;
    type Flags = ();
    type Message = Message;

    const APP_ID: &'static str = app_settings::APP_ID;

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    fn init(core: cosmic::Core, _flags: Self::Flags) -> (Self, Task<cosmic::Action<Self::Message>>) {
        let buffer: SharedBuffer = Arc::new(Mutex::new(String::new()));

        let mut keyboard = VirtualKeyboard::new();
        keyboard.open(Box::new(BufferHandle {
            buffer: Arc::clone(&buffer),
        }));

        let model = DemoModel {
            core,
            buffer,
            keyboard,
            toaster: Toaster::new(),
        };

        (model, Task::none())
    }

    /// Forward global mouse events for dragging, and run the toast timer
    /// while any toast is active.
    fn subscription(&self) -> Subscription<Self::Message> {
        let mut subscriptions = vec![event::listen_with(|event, _, _| match event {
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Some(Message::Keyboard(KeyboardMessage::CursorMoved(position)))
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Some(Message::Keyboard(KeyboardMessage::DragEnd))
            }
            _ => None,
        })];

        if self.toaster.is_active() {
            subscriptions.push(
                time::every(Duration::from_millis(TOAST_TIMER_INTERVAL_MS))
                    .map(|_| Message::Toast(ToastMessage::Tick)),
            );
        }

        Subscription::batch(subscriptions)
    }

    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        match message {
            Message::Keyboard(msg) => self.keyboard.update(msg),
            Message::Toast(msg) => self.toaster.update(msg),
            Message::OpenKeyboard => {
                self.keyboard.open(Box::new(BufferHandle {
                    buffer: Arc::clone(&self.buffer),
                }));
            }
            Message::Notify(category) => {
                let message = format!("{category} toast from the demo");
                self.toaster
                    .notify(message, ToastOptions::default().with_category(category));
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let contents = self
            .buffer
            .lock()
            .map(|buffer| buffer.clone())
            .unwrap_or_default();

        let buffer_view = container(widget::text::body(contents))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(16.0)
            .class(cosmic::style::Container::Background);

        let controls = widget::row::row()
            .spacing(8.0)
            .align_y(Alignment::Center)
            .push(demo_button(fl!("keyboard-title"), Message::OpenKeyboard))
            .push(demo_button(
                fl!("toast-category-info"),
                Message::Notify(Category::Info),
            ))
            .push(demo_button(
                fl!("toast-category-success"),
                Message::Notify(Category::Success),
            ))
            .push(demo_button(
                fl!("toast-category-error"),
                Message::Notify(Category::Error),
            ))
            .push(demo_button(
                fl!("toast-category-warning"),
                Message::Notify(Category::Warning),
            ));

        let base = widget::column::column()
            .spacing(12.0)
            .padding(16.0)
            .push(controls)
            .push(buffer_view);

        let theme = cosmic::theme::active();

        let mut layers = stack(vec![
            container(base).width(Length::Fill).height(Length::Fill).into(),
            render_positioned(&self.keyboard, &theme).map(Message::Keyboard),
        ]);

        if let Some(toasts) = render_stack(&self.toaster, &theme) {
            layers = layers.push(toasts.map(Message::Toast));
        }

        layers.into()
    }
}

/// A standard-styled labeled button for the control row.
fn demo_button<'a>(label: String, message: Message) -> Element<'a, Message> {
    button::custom(widget::text::body(label))
        .on_press(message)
        .class(cosmic::style::Button::Standard)
        .padding(8.0)
        .into()
}
