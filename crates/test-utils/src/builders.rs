#![allow(dead_code)]

use coalescer::config::{
    CommandSection, ConfigFile, RawConfigFile, TriggerSection, WatchSection,
};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new(cmd: &str) -> Self {
        Self {
            config: RawConfigFile {
                trigger: TriggerSection::default(),
                watch: WatchSection::default(),
                command: CommandSection {
                    cmd: cmd.to_string(),
                    workdir: None,
                },
            },
        }
    }

    pub fn pre_run_delay(mut self, secs: u64) -> Self {
        self.config.trigger.pre_run_delay = true;
        self.config.trigger.pre_run_delay_secs = secs;
        self
    }

    pub fn quiet_period(mut self, secs: u64) -> Self {
        self.config.trigger.quiet_period = true;
        self.config.trigger.quiet_period_secs = secs;
        self
    }

    pub fn include(mut self, pattern: &str) -> Self {
        self.config.watch.include.push(pattern.to_string());
        self
    }

    pub fn exclude(mut self, pattern: &str) -> Self {
        self.config.watch.exclude.push(pattern.to_string());
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}
