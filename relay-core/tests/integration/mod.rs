mod concurrency;
mod replay_protection;
