//! A tiny module to wrap a sequence of queries in an SQL transaction.

use sea_orm::{DatabaseTransaction, DbErr, TransactionTrait};

/// Wraps the call of the provided function with an SQL transaction.
///
/// ## Arguments
///
/// * `conn`: the connection to the database, which is forwarded to the provided function
///   as a transaction.
/// * `f`: the function itself.
///
/// The transaction is committed if the function succeeds, and rolled back otherwise.
pub async fn transaction<F, C, T, E>(conn: &C, f: F) -> Result<T, E>
where
    F: for<'a> AsyncFnOnce(&'a DatabaseTransaction) -> Result<T, E>,
    E: From<DbErr>,
    C: TransactionTrait,
{
    let txn = conn.begin().await?;

    match f(&txn).await {
        Ok(ret) => {
            txn.commit().await?;
            Ok(ret)
        }
        Err(e) => {
            txn.rollback().await?;
            Err(e)
        }
    }
}
