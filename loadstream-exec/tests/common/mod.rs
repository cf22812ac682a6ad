// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(dead_code)]

use loadstream_exec::{LoadingObserver, Observer};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<T, E> {
    Loading,
    Value(T),
    Failure(E),
    Complete,
}

/// Observer recording every callback, shareable with the test body.
pub struct Recorder<T, E> {
    events: Arc<Mutex<Vec<Event<T, E>>>>,
}

impl<T, E> Recorder<T, E> {
    pub fn new() -> (Self, Arc<Mutex<Vec<Event<T, E>>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                events: Arc::clone(&events),
            },
            events,
        )
    }

    fn push(&self, event: Event<T, E>) {
        self.events
            .lock()
            .expect("recorder lock poisoned")
            .push(event);
    }
}

impl<T: Send, E: Send> Observer<T, E> for Recorder<T, E> {
    fn on_value(&mut self, value: T) {
        self.push(Event::Value(value));
    }

    fn on_failure(&mut self, error: E) {
        self.push(Event::Failure(error));
    }

    fn on_complete(&mut self) {
        self.push(Event::Complete);
    }
}

impl<T: Send, E: Send> LoadingObserver<T, E> for Recorder<T, E> {
    fn on_loading(&mut self) {
        self.push(Event::Loading);
    }

    fn on_loaded(&mut self, value: T) {
        self.push(Event::Value(value));
    }

    fn on_failed(&mut self, error: E) {
        self.push(Event::Failure(error));
    }

    fn on_complete(&mut self) {
        self.push(Event::Complete);
    }
}

pub fn snapshot<T: Clone, E: Clone>(events: &Arc<Mutex<Vec<Event<T, E>>>>) -> Vec<Event<T, E>> {
    events.lock().expect("recorder lock poisoned").clone()
}
