use crate::configuration::Configuration;
use crate::console::Console;
use crate::service::TransferService;

pub struct Context<'a> {
    pub config: &'a Configuration,
    pub service: &'a dyn TransferService,
    pub console: &'a mut dyn Console,
}

impl<'a> Context<'a> {
    pub fn new(
        config: &'a Configuration,
        service: &'a dyn TransferService,
        console: &'a mut dyn Console,
    ) -> Self {
        Self {
            config,
            service,
            console,
        }
    }
}
