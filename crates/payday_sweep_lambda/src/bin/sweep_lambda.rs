use std::sync::Arc;

use aws_sdk_kms::primitives::Blob;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use payday_sweep_core::monzo::MonzoClient;
use payday_sweep_lambda::adapters::credentials::{resolve_access_token, CredentialDecryptor};
use payday_sweep_lambda::handlers::sweep::handle_sweep_event;
use payday_sweep_lambda::settings::LambdaSettings;
use payday_sweep_lambda::telemetry::init_tracing;
use serde_json::Value;
use tracing::{error, info};

struct KmsCredentialDecryptor {
    kms_client: aws_sdk_kms::Client,
}

impl CredentialDecryptor for KmsCredentialDecryptor {
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, String> {
        let blob = Blob::new(ciphertext.to_vec());
        let client = self.kms_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .decrypt()
                    .ciphertext_blob(blob)
                    .send()
                    .await
                    .map_err(|error| format!("kms decrypt failed: {error}"))?;
                output
                    .plaintext()
                    .map(|plaintext| plaintext.as_ref().to_vec())
                    .ok_or_else(|| "kms decrypt returned no plaintext".to_string())
            })
        })
    }
}

struct SweepRuntime {
    settings: LambdaSettings,
    access_token: String,
}

async fn handle_request(
    event: LambdaEvent<Value>,
    runtime: Arc<SweepRuntime>,
) -> Result<Value, Error> {
    info!(request_id = %event.context.request_id, "handling sweep event");

    tokio::task::block_in_place(|| {
        let client = MonzoClient::new(runtime.access_token.clone(), &runtime.settings.api_url)?;
        let response = handle_sweep_event(event.payload, &runtime.settings, &client)?;
        serde_json::to_value(response)
            .map_err(|error| Error::from(format!("failed to serialize sweep response: {error}")))
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing()?;

    let settings = LambdaSettings::from_env()?;
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let decryptor = KmsCredentialDecryptor {
        kms_client: aws_sdk_kms::Client::new(&aws_config),
    };

    // Without a credential nothing can run; fail the cold start.
    let access_token = resolve_access_token(&settings.access_token_ciphertext, &decryptor)
        .inspect_err(|decrypt_error| error!(error = %decrypt_error, "credential resolution failed"))?;

    let runtime = Arc::new(SweepRuntime {
        settings,
        access_token,
    });

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let runtime = Arc::clone(&runtime);
        async move { handle_request(event, runtime).await }
    }))
    .await
}
