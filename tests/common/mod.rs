#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::io::{self, Write};
use std::path::Path;

use age::secrecy::{ExposeSecret, SecretString};
use uuid::Uuid;

use pantos_client_cli::app;
use pantos_client_cli::cli;
use pantos_client_cli::configuration::Configuration;
use pantos_client_cli::console::Console;
use pantos_client_cli::context::Context;
use pantos_client_cli::service::{PrivateKey, ServiceError, TransferService};
use pantos_client_cli::types::{
    Address, Amount, Chain, DestinationTransfer, ServiceNodeBid, SourceTransfer, TaskInfo,
    TokenSymbol, TransferRequest, TransferStatus,
};

pub const TASK_ID: &str = "b6b59888-41c2-4555-825f-47ce387d6853";
pub const SERVICE_NODE: &str = "0x5188287E724140aa3C432dCfE69E00992aF09d09";
pub const RECIPIENT: &str = "0x2003c848eB0201AA261892081fBC9E4FC559c494";

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Decrypt {
        chain: Chain,
        keystore: String,
        password: String,
    },
    Balance {
        chain: Chain,
        token: String,
    },
    Bids {
        source: Chain,
        destination: Chain,
    },
    Transfer(TransferRequest),
    Status {
        source: Chain,
        service_node: String,
        task_id: Uuid,
        blocks: Option<u64>,
    },
}

/// Records every call and answers with canned results.
pub struct MockService {
    pub calls: RefCell<Vec<Call>>,
    pub balance: Amount,
    pub bids: Vec<ServiceNodeBid>,
    pub status: TransferStatus,
    pub failure: Option<String>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            balance: "0.4".parse().unwrap(),
            bids: Vec::new(),
            status: transfer_status(SourceTransfer::Accepted, DestinationTransfer::Unknown),
            failure: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> Result<(), ServiceError> {
        self.calls.borrow_mut().push(call);
        match &self.failure {
            Some(message) => Err(ServiceError::Request(message.clone())),
            None => Ok(()),
        }
    }
}

impl TransferService for MockService {
    fn decrypt_private_key(
        &self,
        chain: Chain,
        keystore: &str,
        password: &SecretString,
    ) -> Result<PrivateKey, ServiceError> {
        self.calls.borrow_mut().push(Call::Decrypt {
            chain,
            keystore: keystore.to_string(),
            password: password.expose_secret().to_string(),
        });
        Ok(PrivateKey::new(SecretString::from("0xkey")))
    }

    fn retrieve_token_balance(
        &self,
        chain: Chain,
        _private_key: &PrivateKey,
        token: &TokenSymbol,
    ) -> Result<Amount, ServiceError> {
        self.record(Call::Balance {
            chain,
            token: token.to_string(),
        })?;
        Ok(self.balance)
    }

    fn retrieve_service_node_bids(
        &self,
        source: Chain,
        destination: Chain,
    ) -> Result<Vec<ServiceNodeBid>, ServiceError> {
        self.record(Call::Bids {
            source,
            destination,
        })?;
        Ok(self.bids.clone())
    }

    fn transfer_tokens(
        &self,
        request: &TransferRequest,
        _private_key: &PrivateKey,
    ) -> Result<TaskInfo, ServiceError> {
        self.record(Call::Transfer(request.clone()))?;
        Ok(TaskInfo {
            service_node: SERVICE_NODE.parse().unwrap(),
            task_id: Uuid::parse_str(TASK_ID).unwrap(),
        })
    }

    fn get_token_transfer_status(
        &self,
        source: Chain,
        service_node: &Address,
        task_id: Uuid,
        blocks: Option<u64>,
    ) -> Result<TransferStatus, ServiceError> {
        self.record(Call::Status {
            source,
            service_node: service_node.to_string(),
            task_id,
            blocks,
        })?;
        Ok(self.status.clone())
    }
}

/// Console with captured output and queued answers.
#[derive(Default)]
pub struct ScriptedConsole {
    pub out: Vec<u8>,
    pub lines: VecDeque<String>,
    pub passwords: VecDeque<String>,
    pub prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn with_lines(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|line| line.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn with_password(mut self, password: &str) -> Self {
        self.passwords.push_back(password.to_string());
        self
    }

    pub fn output(&self) -> String {
        String::from_utf8(self.out.clone()).unwrap()
    }
}

impl Console for ScriptedConsole {
    fn out(&mut self) -> &mut dyn Write {
        &mut self.out
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front().unwrap_or_default())
    }

    fn read_password(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        Ok(self.passwords.pop_front().unwrap_or_default())
    }
}

pub fn config(vars: &[(&str, &str)]) -> Configuration {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Configuration::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

/// Configuration binding `chain` to the keystore at `path` with a password.
pub fn keystore_config(chain: Chain, path: &Path, password: &str) -> Configuration {
    let file_key = format!("BLOCKCHAINS_{}_KEYSTORE_FILE", chain.name());
    let password_key = format!("BLOCKCHAINS_{}_KEYSTORE_PASSWORD", chain.name());
    let path = path.display().to_string();
    config(&[(file_key.as_str(), path.as_str()), (password_key.as_str(), password)])
}

pub fn keystore_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

pub fn transfer_status(source: SourceTransfer, destination: DestinationTransfer) -> TransferStatus {
    TransferStatus {
        sender_address: "0x4958".parse().unwrap(),
        recipient_address: "0xDc82".parse().unwrap(),
        amount: "100".parse().unwrap(),
        source_token_address: "0x57Fe".parse().unwrap(),
        destination_token_address: "0x4971".parse().unwrap(),
        destination_blockchain: Chain::Polygon,
        source,
        destination,
    }
}

/// Parse `args` against every chain being active and run the command.
pub fn run(
    args: &[&str],
    config: &Configuration,
    service: &MockService,
    console: &mut ScriptedConsole,
) -> anyhow::Result<u8> {
    let argv = std::iter::once("pantos-client").chain(args.iter().copied());
    let cli = cli::try_parse_from(argv, &config.active_chains())?;
    let mut ctx = Context::new(config, service, console);
    app::execute(&cli, &mut ctx)
}
