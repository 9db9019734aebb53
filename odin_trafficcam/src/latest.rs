/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! single-slot "latest value" hand-off between acquisition tasks and the overlay consumer.
//! Publishing overwrites whatever was not consumed yet, i.e. readers never see a backlog

use std::sync::Arc;
use tokio::sync::watch;
use crate::errors::{OdinTrafficCamError, Result};

pub fn latest_slot<T> ()->(SlotWriter<T>, SlotReader<T>) {
    let (tx, rx) = watch::channel( None);
    (SlotWriter { tx }, SlotReader { rx })
}

pub struct SlotWriter<T> {
    tx: watch::Sender<Option<Arc<T>>>,
}

impl<T> SlotWriter<T> {
    /// replace the current value. This succeeds even if there are no readers
    pub fn publish (&self, value: T) {
        self.tx.send_replace( Some( Arc::new(value)));
    }

    pub fn subscribe (&self)->SlotReader<T> {
        SlotReader { rx: self.tx.subscribe() }
    }
}

pub struct SlotReader<T> {
    rx: watch::Receiver<Option<Arc<T>>>,
}

impl<T> Clone for SlotReader<T> {
    fn clone (&self)->Self { SlotReader { rx: self.rx.clone() } }
}

impl<T> SlotReader<T> {
    /// the last published value (if any) without marking it as seen
    pub fn latest (&self)->Option<Arc<T>> {
        self.rx.borrow().clone()
    }

    /// the last published value, marking it as seen
    pub fn consume (&mut self)->Option<Arc<T>> {
        self.rx.borrow_and_update().clone()
    }

    /// was there a publish since our last `consume`
    pub fn has_changed (&self)->bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// wait for the next publish. Fails if the writer is gone
    pub async fn changed (&mut self)->Result<()> {
        self.rx.changed().await.map_err( |_| OdinTrafficCamError::OpFailedError("slot writer closed".to_string()))
    }
}
