use crate::ChainEndpoint;
use alloy::{
    network::Ethereum,
    primitives::TxHash,
    providers::{
        fillers::{FillProvider, TxFiller},
        DynProvider, Provider, RootProvider,
    },
    rpc::types::{Filter, Log, Transaction, TransactionReceipt},
    transports::{TransportError, TransportResult},
};

async fn block_number<P: Provider>(provider: &P) -> TransportResult<u64> {
    provider.get_block_number().await
}

async fn logs<P: Provider>(provider: &P, filter: &Filter) -> TransportResult<Vec<Log>> {
    provider.get_logs(filter).await
}

async fn transaction<P: Provider>(
    provider: &P,
    hash: TxHash,
) -> TransportResult<Option<Transaction>> {
    provider.get_transaction_by_hash(hash).await
}

async fn receipt<P: Provider>(
    provider: &P,
    hash: TxHash,
) -> TransportResult<Option<TransactionReceipt>> {
    provider.get_transaction_receipt(hash).await
}

impl ChainEndpoint for RootProvider {
    type Error = TransportError;

    async fn block_number(&self) -> Result<u64, Self::Error> {
        block_number(self).await
    }

    async fn logs(&self, filter: &Filter) -> Result<Vec<Log>, Self::Error> {
        logs(self, filter).await
    }

    async fn transaction(&self, hash: TxHash) -> Result<Option<Transaction>, Self::Error> {
        transaction(self, hash).await
    }

    async fn receipt(&self, hash: TxHash) -> Result<Option<TransactionReceipt>, Self::Error> {
        receipt(self, hash).await
    }
}

impl ChainEndpoint for DynProvider {
    type Error = TransportError;

    async fn block_number(&self) -> Result<u64, Self::Error> {
        block_number(self).await
    }

    async fn logs(&self, filter: &Filter) -> Result<Vec<Log>, Self::Error> {
        logs(self, filter).await
    }

    async fn transaction(&self, hash: TxHash) -> Result<Option<Transaction>, Self::Error> {
        transaction(self, hash).await
    }

    async fn receipt(&self, hash: TxHash) -> Result<Option<TransactionReceipt>, Self::Error> {
        receipt(self, hash).await
    }
}

impl<F, P> ChainEndpoint for FillProvider<F, P, Ethereum>
where
    F: TxFiller<Ethereum>,
    P: Provider<Ethereum>,
{
    type Error = TransportError;

    async fn block_number(&self) -> Result<u64, Self::Error> {
        block_number(self).await
    }

    async fn logs(&self, filter: &Filter) -> Result<Vec<Log>, Self::Error> {
        logs(self, filter).await
    }

    async fn transaction(&self, hash: TxHash) -> Result<Option<Transaction>, Self::Error> {
        transaction(self, hash).await
    }

    async fn receipt(&self, hash: TxHash) -> Result<Option<TransactionReceipt>, Self::Error> {
        receipt(self, hash).await
    }
}
