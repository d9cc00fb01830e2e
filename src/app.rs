use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::{
    bridge::{self, CallResult, MethodCall, SmsChannel, METHOD_SEND_SMS},
    cli::{Cli, Command, PermissionsAction},
    domain, infra,
    telephony::{self, HostPermissionGate, OutboxTransport},
    usecases::{self, bootstrap, context::AppContext, contracts::PermissionGate},
};

pub fn run(cli: Cli) -> Result<()> {
    let context = bootstrap::bootstrap(cli.config.as_deref())?;

    tracing::debug!(
        bridge = bridge::module_name(),
        domain = domain::module_name(),
        telephony = telephony::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    match cli.command {
        Command::Send { to, message } => {
            let call = MethodCall::new(METHOD_SEND_SMS)
                .with_arg("phoneNumber", to)
                .with_arg("message", message);

            match dispatch(&context, &call) {
                CallResult::Success { message } => {
                    println!("{message}");
                    Ok(())
                }
                CallResult::Error { code, message, .. } => {
                    anyhow::bail!("{code}: {message}")
                }
                CallResult::NotImplemented => {
                    anyhow::bail!("method {} is not implemented", call.method)
                }
            }
        }
        Command::Call { method, args } => {
            let args = parse_args(args.as_deref())?;
            let outcome = dispatch(&context, &MethodCall { method, args });

            println!(
                "{}",
                serde_json::to_string_pretty(&outcome)
                    .context("failed to serialize call result")?
            );
            Ok(())
        }
        Command::Permissions { action } => run_permissions(&context, action),
    }
}

fn dispatch(context: &AppContext, call: &MethodCall) -> CallResult {
    let gate = HostPermissionGate::new(&context.layout.permissions_dir);
    let transport = OutboxTransport::new(context.outbox_dir());

    SmsChannel::new(&gate, &transport).handle(call)
}

fn parse_args(raw: Option<&str>) -> Result<Map<String, Value>> {
    match raw {
        Some(raw) => {
            serde_json::from_str(raw).context("--args must be a JSON object of call arguments")
        }
        None => Ok(Map::new()),
    }
}

fn run_permissions(context: &AppContext, action: PermissionsAction) -> Result<()> {
    let gate = HostPermissionGate::new(&context.layout.permissions_dir);

    match action {
        PermissionsAction::Grant => {
            gate.grant().context("failed to write permission marker")?;
            println!("SMS permission granted.");
        }
        PermissionsAction::Revoke => {
            gate.revoke()
                .context("failed to remove permission marker")?;
            println!("SMS permission revoked.");
        }
        PermissionsAction::Status => {
            let state = if gate.is_granted() {
                "granted"
            } else {
                "not granted"
            };
            println!("SMS permission: {state}");

            if gate.pending_request() {
                println!("A grant request is pending; run `courier permissions grant` to answer it.");
            }
        }
    }

    Ok(())
}
