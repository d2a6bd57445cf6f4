use super::super::helpers::entities::{Person, Team};
use super::super::helpers::{etc::join_tasks, gen};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::task::JoinHandle;
use typestamp_codec::{decode, decode_owned, encode};

/// Encoding and decoding share no state, so any number of tasks may run them at once.
pub async fn test_concurrent_round_trips() -> Result<()> {
    let tasks_ct = 32;
    let records_per_task = 50;

    let mut tasks = vec![];
    for task_i in 0..tasks_ct {
        let task: JoinHandle<Result<usize>> = tokio::spawn(async move {
            let mut rng = StdRng::seed_from_u64(task_i as u64);
            let mut w_len = 0;
            for rec_i in 0..records_per_task {
                let team = gen::gen_team(&mut rng);
                let key = (task_i * records_per_task + rec_i) as u64;
                let bytes = encode((&key, &team))?;
                w_len += bytes.len();

                let (key_out, team_out): (u64, Team) = decode_owned(&bytes)?;
                assert_eq!((key, &team), (key_out, &team_out));
                tokio::task::yield_now().await;
            }
            Ok(w_len)
        });
        tasks.push(task);
    }
    let w_lens = join_tasks(tasks).await?;
    assert_eq!(tasks_ct, w_lens.len());

    /* Many readers of one encoded record. */
    let person = {
        let mut rng = rand::thread_rng();
        gen::gen_person(&mut rng)
    };
    let bytes = Arc::new(encode((&person,))?);
    let person = Arc::new(person);

    let mut tasks = vec![];
    for _ in 0..tasks_ct {
        let bytes = Arc::clone(&bytes);
        let person = Arc::clone(&person);
        let task: JoinHandle<Result<()>> = tokio::spawn(async move {
            let mut out = Person::default();
            let r_len = decode(&bytes, (&mut out,))?;
            assert_eq!(bytes.len(), *r_len);
            assert_eq!(*person, out);
            Ok(())
        });
        tasks.push(task);
    }
    join_tasks(tasks).await?;

    Ok(())
}
