mod payment;
mod requests;
mod subscription;
