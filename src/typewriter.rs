//! Typing effect that cycles through a list of roles, growing each one a
//! character at a time, holding it, then shrinking it back to nothing.
//!
//! [`Typewriter`] is the pure state machine. [`start`] drives it with any
//! [`Scheduler`] and writes every frame to a [`TextSink`]; the returned
//! [`TypewriterHandle`] stops the loop.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypewriterError {
    #[error("typewriter needs at least one role")]
    EmptyRoleList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    /// Delay between appended characters.
    pub type_speed_ms: u64,
    /// Delay between removed characters.
    pub delete_speed_ms: u64,
    /// Hold once a role is fully typed.
    pub pause_at_full_ms: u64,
    /// Hold once a role is fully deleted, before the next one starts.
    pub pause_between_roles_ms: u64,
    /// Delay before the very first step.
    pub initial_delay_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_speed_ms: 100,
            delete_speed_ms: 50,
            pause_at_full_ms: 2000,
            pause_between_roles_ms: 500,
            initial_delay_ms: 1000,
        }
    }
}

impl TypewriterConfig {
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }
}

/// Non-empty, read-only rotation of display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleList(Vec<String>);

impl RoleList {
    pub fn new<I, S>(roles: I) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles = roles.into_iter().map(Into::into).collect::<Vec<_>>();
        if roles.is_empty() {
            return Err(TypewriterError::EmptyRoleList);
        }
        Ok(Self(roles))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    // always false, construction rejects empty lists
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> &str {
        &self.0[index % self.0.len()]
    }
}

/// Prefix of `s` holding its first `chars` characters.
fn char_prefix(s: &str, chars: usize) -> &str {
    match s.char_indices().nth(chars) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: RoleList,
    config: TypewriterConfig,
    role_index: usize,
    char_index: usize,
    is_deleting: bool,
    rendered: String,
}

impl Typewriter {
    pub fn new(roles: RoleList, config: TypewriterConfig) -> Self {
        Self {
            roles,
            config,
            role_index: 0,
            char_index: 0,
            is_deleting: false,
            rendered: String::new(),
        }
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn is_deleting(&self) -> bool {
        self.is_deleting
    }

    pub fn current_role(&self) -> &str {
        self.roles.get(self.role_index)
    }

    pub fn rendered_text(&self) -> &str {
        &self.rendered
    }

    /// Advances one character in the current direction and returns the delay
    /// before the next step should run.
    pub fn step(&mut self) -> Duration {
        let role = self.roles.get(self.role_index);
        let role_len = role.chars().count();

        self.char_index = if self.is_deleting {
            self.char_index.saturating_sub(1)
        } else {
            (self.char_index + 1).min(role_len)
        };
        self.rendered.clear();
        self.rendered.push_str(char_prefix(role, self.char_index));

        let mut delay_ms = if self.is_deleting {
            self.config.delete_speed_ms
        } else {
            self.config.type_speed_ms
        };

        if !self.is_deleting && self.char_index == role_len {
            delay_ms = self.config.pause_at_full_ms;
            self.is_deleting = true;
        } else if self.is_deleting && self.char_index == 0 {
            self.is_deleting = false;
            self.role_index = (self.role_index + 1) % self.roles.len();
            delay_ms = self.config.pause_between_roles_ms;
        }

        Duration::from_millis(delay_ms)
    }

    /// Hands the state machine to `scheduler`; the first step runs after the
    /// configured initial delay.
    pub fn run<S, T>(self, sink: S, scheduler: T) -> TypewriterHandle
    where
        S: TextSink + 'static,
        T: Scheduler + Clone + 'static,
    {
        let handle = TypewriterHandle::default();
        let delay = self.config.initial_delay();
        log::debug!("typewriter starting with {} roles", self.roles.len());
        Running {
            typewriter: self,
            sink,
            scheduler,
            handle: handle.clone(),
        }
        .schedule(delay);
        handle
    }
}

/// Where each frame of the effect is written.
pub trait TextSink {
    fn set_text(&mut self, text: &str);
}

/// Fire-once deferred execution.
pub trait Scheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>);
}

/// Stop flag for a running effect. Clones share the flag.
#[derive(Debug, Clone, Default)]
pub struct TypewriterHandle {
    stopped: Arc<AtomicBool>,
}

impl TypewriterHandle {
    pub fn stop(&self) {
        if !self.stopped.swap(true, Ordering::SeqCst) {
            log::debug!("typewriter stopped");
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

struct Running<S, T> {
    typewriter: Typewriter,
    sink: S,
    scheduler: T,
    handle: TypewriterHandle,
}

impl<S, T> Running<S, T>
where
    S: TextSink + 'static,
    T: Scheduler + Clone + 'static,
{
    fn schedule(self, delay: Duration) {
        if self.handle.is_stopped() {
            return;
        }
        let scheduler = self.scheduler.clone();
        scheduler.schedule_once(delay, Box::new(move || self.tick()));
    }

    fn tick(mut self) {
        if self.handle.is_stopped() {
            return;
        }
        let delay = self.typewriter.step();
        self.sink.set_text(self.typewriter.rendered_text());
        self.schedule(delay);
    }
}

/// Starts the typing loop.
///
/// An empty role list is a configuration error. A missing sink is not: the
/// page simply has nowhere to type, so nothing starts and `Ok(None)` comes
/// back.
pub fn start<S, T>(
    roles: Vec<String>,
    sink: Option<S>,
    config: TypewriterConfig,
    scheduler: T,
) -> Result<Option<TypewriterHandle>, TypewriterError>
where
    S: TextSink + 'static,
    T: Scheduler + Clone + 'static,
{
    let roles = RoleList::new(roles)?;
    let Some(sink) = sink else {
        log::debug!("no typing target, typewriter not started");
        return Ok(None);
    };
    Ok(Some(Typewriter::new(roles, config).run(sink, scheduler)))
}
