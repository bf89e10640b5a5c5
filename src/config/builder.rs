use anyhow::Result;

use super::types::{
    BackendKind, Config, ContextSettings, DaemonSettings, HostedSettings, HttpSettings,
    PipelineSettings,
};

#[derive(Debug)]
pub struct ConfigBuilder {
    pub(super) backend: BackendKind,
    pub(super) hosted: HostedSettings,
    pub(super) pipeline: PipelineSettings,
    pub(super) daemon: DaemonSettings,
    pub(super) context: ContextSettings,
    pub(super) http: HttpSettings,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            backend: BackendKind::default(),
            hosted: HostedSettings::default(),
            pipeline: PipelineSettings::default(),
            daemon: DaemonSettings::default(),
            context: ContextSettings::default(),
            http: HttpSettings::default(),
        }
    }

    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_hosted<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut HostedSettings),
    {
        update(&mut self.hosted);
        self
    }

    pub fn with_pipeline<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut PipelineSettings),
    {
        update(&mut self.pipeline);
        self
    }

    pub fn with_daemon<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut DaemonSettings),
    {
        update(&mut self.daemon);
        self
    }

    pub fn with_context<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut ContextSettings),
    {
        update(&mut self.context);
        self
    }

    pub fn with_http<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut HttpSettings),
    {
        update(&mut self.http);
        self
    }

    pub fn build(self) -> Result<Config> {
        Ok(Config {
            backend: self.backend,
            hosted: self.hosted,
            pipeline: self.pipeline,
            daemon: self.daemon,
            context: self.context,
            http: self.http,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
